//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Access to the token under construction
//! - Attribute helpers for duplicate detection
//! - Parse error recording

use log::{debug, trace};

use super::attributes::Attribute;
use super::core::{HTMLTokenizer, TokenizerState};
use super::error::{ParseError, ParseErrorKind};
use super::token::{DoctypeToken, Token};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next step.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the input is exhausted.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it.
    pub(super) fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek_codepoint(i) == Some(expected))
    }

    /// "ASCII case-insensitive match for the word ..."
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        target.chars().enumerate().all(|(i, expected)| {
            self.peek_codepoint(i)
                .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
        })
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present, and the
    /// target must be ASCII so its byte length matches the input's.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// [§ 13.2.5.55 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    ///
    /// "If the six characters starting from the current input character are an
    /// ASCII case-insensitive match for the word ..."
    ///
    /// The current input character has already been consumed, so it is checked
    /// on its own and the rest of the keyword is looked up ahead.
    pub(super) fn current_and_next_characters_are_case_insensitive(&self, keyword: &str) -> bool {
        let mut chars = keyword.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        self.current_input_character
            .is_some_and(|c| c.eq_ignore_ascii_case(&first))
            && self.next_few_characters_are_case_insensitive(chars.as_str())
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    ///
    /// A `/` directly followed by `>` ends the unquoted value and makes the
    /// tag self-closing: `<br class=x/>` yields `class="x"`. The published
    /// algorithm appends the `/` to the value instead; this is the only
    /// place the tokenizer departs from it there.
    pub(super) fn solidus_closes_unquoted_value(&self) -> bool {
        self.current_input_character == Some('/') && self.peek_codepoint(0) == Some('>')
    }

    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    ///
    /// CR never reaches the tokenizer; input preprocessing turns it into LF.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current input character as a character token."
    ///
    /// Characters collect into one run that is emitted ahead of the next
    /// non-text token.
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.pending_text.push(c);
    }

    /// "Emit a U+003C LESS-THAN SIGN character token and a U+002F SOLIDUS
    /// character token."
    ///
    /// Several characters at once, appended to the same run.
    pub(super) fn emit_character_tokens(&mut self, s: &str) {
        self.pending_text.push_str(s);
    }

    fn flush_pending_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.pending_text);
        self.push_token(Token::Character { data });
    }

    /// "Emit the current token"
    ///
    /// Commits any attribute still being built before the tag leaves the
    /// tokenizer.
    pub(super) fn emit_token(&mut self) {
        self.commit_pending_attribute();
        if let Some(token) = self.current_token.take() {
            self.flush_pending_text();
            self.push_token(token);
        }
    }

    /// "Emit an end-of-file token."
    ///
    /// A tag still under construction is dropped, as the EOF entries of the
    /// tag states require.
    pub(super) fn emit_eof_token(&mut self) {
        self.current_token = None;
        self.pending_attribute = None;
        self.flush_pending_text();
        self.push_token(Token::EndOfFile);
        self.at_eof = true;
    }

    fn push_token(&mut self, token: Token) {
        trace!("emit {token}");
        self.token_queue.push_back(token);
    }
}

// =============================================================================
// Current Token Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Append the current input character to the current tag token's tag name."
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        match self.current_token {
            Some(Token::StartTag(ref mut tag)) => tag.append_to_tag_name(c),
            Some(Token::EndTag(ref mut tag)) => tag.append_to_tag_name(c),
            _ => unreachable!("tag name state entered without a tag token"),
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    ///
    /// An end tag keeps its flag unset; the solidus is only a parse error there.
    pub(super) fn set_self_closing(&mut self) {
        let is_end_tag = match self.current_token {
            Some(Token::StartTag(ref mut tag)) => {
                tag.set_self_closing();
                false
            }
            Some(Token::EndTag(_)) => true,
            _ => unreachable!("self-closing start tag state entered without a tag token"),
        };
        if is_end_tag {
            self.parse_error(ParseErrorKind::EndTagWithTrailingSolidus);
        }
    }

    /// The DOCTYPE token the DOCTYPE states are filling in.
    pub(super) fn current_doctype(&mut self) -> &mut DoctypeToken {
        match self.current_token {
            Some(Token::Doctype(ref mut doctype)) => doctype,
            _ => unreachable!("DOCTYPE state entered without a DOCTYPE token"),
        }
    }

    /// "Append the current input character to the comment token's data."
    pub(super) fn comment_data(&mut self) -> &mut String {
        match self.current_token {
            Some(Token::Comment { ref mut data }) => data,
            _ => unreachable!("comment state entered without a comment token"),
        }
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    ///
    /// "Start a new attribute in the current tag token."
    ///
    /// The previous attribute, if any, is committed first.
    pub(super) fn start_new_attribute(&mut self) {
        self.commit_pending_attribute();
        self.pending_attribute = Some(Attribute::default());
    }

    /// "Append the current input character to the current attribute's name."
    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(ref mut attr) = self.pending_attribute {
            attr.name.push(c);
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(ref mut attr) = self.pending_attribute {
            attr.value.push(c);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "If there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute must
    /// be removed from the token."
    ///
    /// The first attribute with a given name stays; later ones are dropped
    /// after being fully consumed. End tags keep no attributes at all.
    pub(super) fn commit_pending_attribute(&mut self) {
        let Some(Attribute { name, mut value }) = self.pending_attribute.take() else {
            return;
        };
        let kind = match self.current_token {
            Some(Token::StartTag(ref mut tag)) => {
                self.config.fold_attribute_value(&mut value);
                if tag.attributes_mut().insert_if_absent(name, value) {
                    return;
                }
                ParseErrorKind::DuplicateAttribute
            }
            Some(Token::EndTag(_)) => ParseErrorKind::EndTagWithAttributes,
            _ => unreachable!("attribute committed without a tag token"),
        };
        self.parse_error(kind);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors in HTML are not fatal - the tokenizer recovers and continues.
    pub(super) fn parse_error(&mut self, kind: ParseErrorKind) {
        let error = ParseError {
            kind,
            position: self.source_offset(self.current_pos),
        };
        debug!(
            "{} at byte {} in {} state",
            kind.code(),
            error.position,
            self.state
        );
        if self.config.collect_parse_errors {
            self.errors.push(error);
        }
    }
}
