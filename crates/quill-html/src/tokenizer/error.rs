//! Parse errors and token contract violations.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "Parse errors are only errors with the syntax of HTML." None of them stop
//! the tokenizer: each one is recovered by the transition that detected it and
//! recorded here for callers that want diagnostics.

use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

use super::token::TokenKind;

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// The error codes the tokenizer can report. `Display` renders the code
/// exactly as the standard spells it, e.g. `duplicate-attribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "kebab-case")]
pub enum ParseErrorKind {
    /// "abrupt-closing-of-empty-comment"
    AbruptClosingOfEmptyComment,
    /// "abrupt-doctype-public-identifier"
    AbruptDoctypePublicIdentifier,
    /// "abrupt-doctype-system-identifier"
    AbruptDoctypeSystemIdentifier,
    /// "cdata-in-html-content"
    CdataInHtmlContent,
    /// "duplicate-attribute"
    DuplicateAttribute,
    /// "end-tag-with-attributes"
    ///
    /// Reported once per attribute found on an end tag.
    EndTagWithAttributes,
    /// "end-tag-with-trailing-solidus"
    EndTagWithTrailingSolidus,
    /// "eof-before-tag-name"
    EofBeforeTagName,
    /// "eof-in-comment"
    EofInComment,
    /// "eof-in-doctype"
    EofInDoctype,
    /// "eof-in-tag"
    EofInTag,
    /// "incorrectly-closed-comment"
    IncorrectlyClosedComment,
    /// "incorrectly-opened-comment"
    IncorrectlyOpenedComment,
    /// "invalid-character-sequence-after-doctype-name"
    InvalidCharacterSequenceAfterDoctypeName,
    /// "invalid-first-character-of-tag-name"
    InvalidFirstCharacterOfTagName,
    /// "missing-attribute-value"
    MissingAttributeValue,
    /// "missing-doctype-name"
    MissingDoctypeName,
    /// "missing-doctype-public-identifier"
    MissingDoctypePublicIdentifier,
    /// "missing-doctype-system-identifier"
    MissingDoctypeSystemIdentifier,
    /// "missing-end-tag-name"
    MissingEndTagName,
    /// "missing-quote-before-doctype-public-identifier"
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// "missing-quote-before-doctype-system-identifier"
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// "missing-whitespace-after-doctype-public-keyword"
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// "missing-whitespace-after-doctype-system-keyword"
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// "missing-whitespace-before-doctype-name"
    MissingWhitespaceBeforeDoctypeName,
    /// "missing-whitespace-between-attributes"
    MissingWhitespaceBetweenAttributes,
    /// "missing-whitespace-between-doctype-public-and-system-identifiers"
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// "nested-comment"
    NestedComment,
    /// "unexpected-character-after-doctype-system-identifier"
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// "unexpected-character-in-attribute-name"
    UnexpectedCharacterInAttributeName,
    /// "unexpected-character-in-unquoted-attribute-value"
    UnexpectedCharacterInUnquotedAttributeValue,
    /// "unexpected-equals-sign-before-attribute-name"
    UnexpectedEqualsSignBeforeAttributeName,
    /// "unexpected-null-character"
    UnexpectedNullCharacter,
    /// "unexpected-question-mark-instead-of-tag-name"
    UnexpectedQuestionMarkInsteadOfTagName,
    /// "unexpected-solidus-in-tag"
    UnexpectedSolidusInTag,
}

impl ParseErrorKind {
    /// The error code as the standard spells it, without allocating.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// A recoverable parse error and where the tokenizer was when it saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct ParseError {
    /// The standard error code.
    pub kind: ParseErrorKind,
    /// Byte offset into the input as given, just past the offending character.
    pub position: usize,
}

/// Returned when a [`Token`](super::Token) is converted into a payload type
/// of a different variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} token, found a {found} token")]
pub struct TokenKindMismatch {
    /// The variant the caller asked for.
    pub expected: TokenKind,
    /// The variant the token actually is.
    pub found: TokenKind,
}
