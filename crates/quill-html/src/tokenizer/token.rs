use core::fmt;

use serde::Serialize;
use strum_macros::Display;

use super::attributes::AttributeMap;
use super::error::TokenKindMismatch;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "DOCTYPE tokens have a name, a public identifier, a system identifier,
/// and a force-quirks flag. When a DOCTYPE token is created, its name,
/// public identifier, and system identifier must be marked as missing
/// (which is a distinct state from the empty string)."
///
/// The force-quirks flag is reported as [`DoctypeToken::quirks_required`].
/// A token built with [`DoctypeToken::new`] has it off; the tokenizer starts
/// its DOCTYPE tokens with it on and clears it once a name is captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctypeToken {
    name: Option<String>,
    public_identifier: Option<String>,
    system_identifier: Option<String>,
    force_quirks: bool,
}

impl DoctypeToken {
    /// A DOCTYPE with every field missing and quirks off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        }
    }

    /// The DOCTYPE token the tokenizer creates: nothing captured yet, so
    /// quirks mode is required until a name shows up.
    pub(super) const fn new_in_quirks_mode() -> Self {
        Self {
            name: None,
            public_identifier: None,
            system_identifier: None,
            force_quirks: true,
        }
    }

    /// Whether a name was captured. An empty name still counts.
    #[must_use]
    pub const fn is_name_set(&self) -> bool {
        self.name.is_some()
    }

    /// The lower-cased DOCTYPE name, if one was captured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a public identifier was present, even an empty one.
    #[must_use]
    pub const fn is_public_identifier_set(&self) -> bool {
        self.public_identifier.is_some()
    }

    /// The public identifier, verbatim.
    #[must_use]
    pub fn public_identifier(&self) -> Option<&str> {
        self.public_identifier.as_deref()
    }

    /// Whether a system identifier was present, even an empty one.
    #[must_use]
    pub const fn is_system_identifier_set(&self) -> bool {
        self.system_identifier.is_some()
    }

    /// The system identifier, verbatim.
    #[must_use]
    pub fn system_identifier(&self) -> Option<&str> {
        self.system_identifier.as_deref()
    }

    /// Whether the document this DOCTYPE heads must be rendered in quirks mode.
    #[must_use]
    pub const fn quirks_required(&self) -> bool {
        self.force_quirks
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    ///
    /// "Append the current input character to the current DOCTYPE token's name."
    ///
    /// A captured name lifts the quirks requirement unless an identifier is
    /// already present.
    pub(super) fn append_to_name(&mut self, c: char) {
        self.name.get_or_insert_with(String::new).push(c);
        if self.public_identifier.is_none() && self.system_identifier.is_none() {
            self.force_quirks = false;
        }
    }

    /// "Set the current DOCTYPE token's public identifier to the empty string
    /// (not missing)."
    ///
    /// Any public identifier requires quirks mode.
    pub(super) fn start_public_identifier(&mut self) {
        self.public_identifier = Some(String::new());
        self.force_quirks = true;
    }

    pub(super) fn append_to_public_identifier(&mut self, c: char) {
        self.public_identifier.get_or_insert_with(String::new).push(c);
    }

    /// "Set the current DOCTYPE token's system identifier to the empty string
    /// (not missing)."
    ///
    /// Any system identifier requires quirks mode.
    pub(super) fn start_system_identifier(&mut self) {
        self.system_identifier = Some(String::new());
        self.force_quirks = true;
    }

    pub(super) fn append_to_system_identifier(&mut self, c: char) {
        self.system_identifier.get_or_insert_with(String::new).push(c);
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub(super) const fn set_force_quirks(&mut self) {
        self.force_quirks = true;
    }
}

/// "Start and end tag tokens have a tag name, a self-closing flag, and a
/// list of attributes."
///
/// Tag and attribute names are always ASCII lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartTagToken {
    tag_name: String,
    attributes: AttributeMap,
    self_closing: bool,
}

impl StartTagToken {
    /// A start tag with no attributes. The name is ASCII lower-cased.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: AttributeMap::new(),
            self_closing: false,
        }
    }

    /// Add an attribute, folding its name. Ignored if the name is already present.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        let _ = self
            .attributes
            .insert_if_absent(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Mark the tag as self-closing.
    #[must_use]
    pub const fn with_self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// The lower-case tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Attributes in source order, first occurrence of each name only.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Whether an attribute with exactly this (lower-case) name is present.
    #[must_use]
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// The value of the attribute with exactly this (lower-case) name.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Whether the tag ended with `/>`.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub(super) fn append_to_tag_name(&mut self, c: char) {
        self.tag_name.push(c);
    }

    pub(super) const fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    pub(super) const fn set_self_closing(&mut self) {
        self.self_closing = true;
    }
}

/// An end tag. Attributes and a trailing solidus are parse errors on end tags,
/// so neither survives tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndTagToken {
    tag_name: String,
    self_closing: bool,
}

impl EndTagToken {
    /// An end tag. The name is ASCII lower-cased.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            self_closing: false,
        }
    }

    /// The lower-case tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Always false: a `/` before `>` has no effect on an end tag.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub(super) fn append_to_tag_name(&mut self, c: char) {
        self.tag_name.push(c);
    }
}

/// Which variant a [`Token`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// [`Token::Doctype`]
    Doctype,
    /// [`Token::StartTag`]
    StartTag,
    /// [`Token::EndTag`]
    EndTag,
    /// [`Token::Comment`]
    Comment,
    /// [`Token::Character`]
    Character,
    /// [`Token::EndOfFile`]
    EndOfFile,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// The variant-specific accessors on `Token` panic when called on another
/// variant. Match on the token, use `as_*`, or convert with `TryFrom` to
/// get checked access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    /// A `<!DOCTYPE ...>` declaration.
    Doctype(DoctypeToken),

    /// An opening tag such as `<img src="a.png">`.
    StartTag(StartTagToken),

    /// A closing tag such as `</p>`.
    EndTag(EndTagToken),

    /// "Comment and character tokens have data."
    Comment {
        /// Text between the comment delimiters, verbatim.
        data: String,
    },

    /// A run of text between markup constructs.
    Character {
        /// The text, never empty.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Which variant this token is.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Doctype(_) => TokenKind::Doctype,
            Self::StartTag(_) => TokenKind::StartTag,
            Self::EndTag(_) => TokenKind::EndTag,
            Self::Comment { .. } => TokenKind::Comment,
            Self::Character { .. } => TokenKind::Character,
            Self::EndOfFile => TokenKind::EndOfFile,
        }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The DOCTYPE payload, if this is a DOCTYPE token.
    #[must_use]
    pub const fn as_doctype(&self) -> Option<&DoctypeToken> {
        match self {
            Self::Doctype(doctype) => Some(doctype),
            _ => None,
        }
    }

    /// The start tag payload, if this is a start tag token.
    #[must_use]
    pub const fn as_start_tag(&self) -> Option<&StartTagToken> {
        match self {
            Self::StartTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The end tag payload, if this is an end tag token.
    #[must_use]
    pub const fn as_end_tag(&self) -> Option<&EndTagToken> {
        match self {
            Self::EndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The tag name of a start or end tag.
    ///
    /// # Panics
    ///
    /// Panics if this is not a tag token.
    #[must_use]
    #[track_caller]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::StartTag(tag) => tag.tag_name(),
            Self::EndTag(tag) => tag.tag_name(),
            _ => self.contract_violation("tag_name"),
        }
    }

    /// The attributes of a start tag.
    ///
    /// # Panics
    ///
    /// Panics if this is not a start tag token.
    #[must_use]
    #[track_caller]
    pub fn attributes(&self) -> &AttributeMap {
        match self {
            Self::StartTag(tag) => tag.attributes(),
            _ => self.contract_violation("attributes"),
        }
    }

    /// Whether a start tag carries an attribute with exactly this name.
    ///
    /// # Panics
    ///
    /// Panics if this is not a start tag token.
    #[must_use]
    #[track_caller]
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes().contains(name)
    }

    /// The value of a start tag's attribute with exactly this name.
    ///
    /// # Panics
    ///
    /// Panics if this is not a start tag token.
    #[must_use]
    #[track_caller]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    /// The self-closing flag of a start or end tag.
    ///
    /// # Panics
    ///
    /// Panics if this is not a tag token.
    #[must_use]
    #[track_caller]
    pub fn is_self_closing(&self) -> bool {
        match self {
            Self::StartTag(tag) => tag.is_self_closing(),
            Self::EndTag(tag) => tag.is_self_closing(),
            _ => self.contract_violation("is_self_closing"),
        }
    }

    /// Whether a DOCTYPE captured a name.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn is_name_set(&self) -> bool {
        self.doctype("is_name_set").is_name_set()
    }

    /// The DOCTYPE name.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn name(&self) -> Option<&str> {
        self.doctype("name").name()
    }

    /// Whether a DOCTYPE carried a public identifier.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn is_public_identifier_set(&self) -> bool {
        self.doctype("is_public_identifier_set")
            .is_public_identifier_set()
    }

    /// The DOCTYPE public identifier.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn public_identifier(&self) -> Option<&str> {
        self.doctype("public_identifier").public_identifier()
    }

    /// Whether a DOCTYPE carried a system identifier.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn is_system_identifier_set(&self) -> bool {
        self.doctype("is_system_identifier_set")
            .is_system_identifier_set()
    }

    /// The DOCTYPE system identifier.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn system_identifier(&self) -> Option<&str> {
        self.doctype("system_identifier").system_identifier()
    }

    /// Whether a DOCTYPE requires quirks mode.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DOCTYPE token.
    #[must_use]
    #[track_caller]
    pub fn quirks_required(&self) -> bool {
        self.doctype("quirks_required").quirks_required()
    }

    #[track_caller]
    fn doctype(&self, accessor: &str) -> &DoctypeToken {
        match self {
            Self::Doctype(doctype) => doctype,
            _ => self.contract_violation(accessor),
        }
    }

    #[track_caller]
    fn contract_violation(&self, accessor: &str) -> ! {
        panic!("{accessor} called on a {} token", self.kind())
    }
}

impl TryFrom<Token> for DoctypeToken {
    type Error = TokenKindMismatch;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Doctype(doctype) => Ok(doctype),
            other => Err(TokenKindMismatch {
                expected: TokenKind::Doctype,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Token> for StartTagToken {
    type Error = TokenKindMismatch;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::StartTag(tag) => Ok(tag),
            other => Err(TokenKindMismatch {
                expected: TokenKind::StartTag,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Token> for EndTagToken {
    type Error = TokenKindMismatch;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::EndTag(tag) => Ok(tag),
            other => Err(TokenKindMismatch {
                expected: TokenKind::EndTag,
                found: other.kind(),
            }),
        }
    }
}

impl From<DoctypeToken> for Token {
    fn from(doctype: DoctypeToken) -> Self {
        Self::Doctype(doctype)
    }
}

impl From<StartTagToken> for Token {
    fn from(tag: StartTagToken) -> Self {
        Self::StartTag(tag)
    }
}

impl From<EndTagToken> for Token {
    fn from(tag: EndTagToken) -> Self {
        Self::EndTag(tag)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype(doctype) => {
                write!(f, "DOCTYPE")?;
                if let Some(name) = doctype.name() {
                    write!(f, " {name}")?;
                }
                if let Some(public_id) = doctype.public_identifier() {
                    write!(f, " PUBLIC \"{public_id}\"")?;
                }
                if let Some(system_id) = doctype.system_identifier() {
                    write!(f, " SYSTEM \"{system_id}\"")?;
                }
                if doctype.quirks_required() {
                    write!(f, " (quirks)")?;
                }
                Ok(())
            }
            Self::StartTag(tag) => {
                write!(f, "<{}", tag.tag_name())?;
                for attr in tag.attributes() {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if tag.is_self_closing() {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag(tag) => write!(f, "</{}>", tag.tag_name()),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => write!(f, "Character({data:?})"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
