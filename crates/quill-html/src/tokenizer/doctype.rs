//! DOCTYPE states of the tokenizer.
//!
//! [§ 13.2.5.53 - § 13.2.5.68](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
//!
//! Each DOCTYPE token starts out requiring quirks mode. Capturing a name lifts
//! that, and any public or system identifier puts it back.

use super::core::{HTMLTokenizer, TokenizerState};
use super::error::ParseErrorKind;
use super::token::{DoctypeToken, Token};

impl HTMLTokenizer {
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED,
            // U+0020 SPACE - Switch to the before DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypeName);
            }
            // "U+003E GREATER-THAN SIGN (>) - Reconsume in the before DOCTYPE name state."
            Some('>') => {
                self.reconsume_in(TokenizerState::BeforeDoctypeName);
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new DOCTYPE token.
            // Set its force-quirks flag to on. Emit the current token. Emit an end-of-file token."
            None => {
                self.create_doctype_token();
                self.emit_doctype_at_eof();
            }
            // "Anything else - This is a missing-whitespace-before-doctype-name parse error.
            // Reconsume in the before DOCTYPE name state."
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDoctypeName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED,
            // U+0020 SPACE - Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "ASCII upper alpha - Create a new DOCTYPE token. Set the token's name to the
            // lowercase version of the current input character. Switch to the DOCTYPE name state."
            Some(c) if c.is_ascii_uppercase() => {
                self.create_doctype_token();
                self.current_doctype().append_to_name(c.to_ascii_lowercase());
                self.switch_to(TokenizerState::DoctypeName);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error. Create a new
            // DOCTYPE token. Set the token's name to a U+FFFD REPLACEMENT CHARACTER character.
            // Switch to the DOCTYPE name state."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.create_doctype_token();
                self.current_doctype().append_to_name('\u{FFFD}');
                self.switch_to(TokenizerState::DoctypeName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-name parse error.
            // Create a new DOCTYPE token. Set its force-quirks flag to on. Switch to the
            // data state. Emit the current token."
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypeName);
                self.create_doctype_token();
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new DOCTYPE token.
            // Set its force-quirks flag to on. Emit the current token. Emit an end-of-file token."
            None => {
                self.create_doctype_token();
                self.emit_doctype_at_eof();
            }
            // "Anything else - Create a new DOCTYPE token. Set the token's name to the
            // current input character. Switch to the DOCTYPE name state."
            Some(c) => {
                self.create_doctype_token();
                self.current_doctype().append_to_name(c);
                self.switch_to(TokenizerState::DoctypeName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED,
            // U+0020 SPACE - Switch to the after DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDoctypeName);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit the current
            // DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "ASCII upper alpha - Append the lowercase version of the current input
            // character to the current DOCTYPE token's name."
            Some(c) if c.is_ascii_uppercase() => {
                self.current_doctype().append_to_name(c.to_ascii_lowercase());
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error. Append a
            // U+FFFD REPLACEMENT CHARACTER character to the current DOCTYPE token's name."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.current_doctype().append_to_name('\u{FFFD}');
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "Anything else - Append the current input character to the current DOCTYPE
            // token's name."
            Some(c) => {
                self.current_doctype().append_to_name(c);
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "Anything else -
            // If the six characters starting from the current input character are an ASCII
            // case-insensitive match for the word 'PUBLIC', then consume those characters and
            // switch to the after DOCTYPE public keyword state.
            // Otherwise, if the six characters starting from the current input character are an
            // ASCII case-insensitive match for the word 'SYSTEM', then consume those characters
            // and switch to the after DOCTYPE system keyword state.
            // Otherwise, this is an invalid-character-sequence-after-doctype-name parse error.
            // Set the current DOCTYPE token's force-quirks flag to on. Reconsume in the bogus
            // DOCTYPE state."
            Some(_) => {
                if self.current_and_next_characters_are_case_insensitive("PUBLIC") {
                    self.consume_string("UBLIC");
                    self.switch_to(TokenizerState::AfterDoctypePublicKeyword);
                } else if self.current_and_next_characters_are_case_insensitive("SYSTEM") {
                    self.consume_string("YSTEM");
                    self.switch_to(TokenizerState::AfterDoctypeSystemKeyword);
                } else {
                    self.bogus_doctype(ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);
                }
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    pub(super) fn handle_after_doctype_public_keyword_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED,
            // U+0020 SPACE - Switch to the before DOCTYPE public identifier state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypePublicIdentifier);
            }
            // "U+0022 QUOTATION MARK (\") - This is a missing-whitespace-after-doctype-public-keyword
            // parse error. Set the current DOCTYPE token's public identifier to the empty string
            // (not missing), then switch to the DOCTYPE public identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword);
                self.begin_public_identifier(quote);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-public-identifier
            // parse error. Set the current DOCTYPE token's force-quirks flag to on. Switch to
            // the data state. Emit the current DOCTYPE token."
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::MissingDoctypePublicIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "Anything else - This is a missing-quote-before-doctype-public-identifier parse
            // error. Set the current DOCTYPE token's force-quirks flag to on. Reconsume in the
            // bogus DOCTYPE state."
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);
            }
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    pub(super) fn handle_before_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => {
                self.begin_public_identifier(quote);
            }
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::MissingDoctypePublicIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);
            }
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_public_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.switch_to(TokenizerState::AfterDoctypePublicIdentifier);
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.current_doctype().append_to_public_identifier('\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an abrupt-doctype-public-identifier
            // parse error. Set the current DOCTYPE token's force-quirks flag to on. Switch to
            // the data state. Emit the current DOCTYPE token."
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::AbruptDoctypePublicIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(c) => {
                self.current_doctype().append_to_public_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED,
            // U+0020 SPACE - Switch to the between DOCTYPE public and system identifiers state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDoctypePublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "U+0022 QUOTATION MARK (\") - This is a
            // missing-whitespace-between-doctype-public-and-system-identifiers parse error.
            // Set the current DOCTYPE token's system identifier to the empty string (not
            // missing), then switch to the DOCTYPE system identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.begin_system_identifier(quote);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
            }
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some(quote @ ('"' | '\'')) => {
                self.begin_system_identifier(quote);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
            }
        }
    }

    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_system_keyword_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypeSystemIdentifier);
            }
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword);
                self.begin_system_identifier(quote);
            }
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::MissingDoctypeSystemIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
            }
        }
    }

    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => {
                self.begin_system_identifier(quote);
            }
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::MissingDoctypeSystemIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.bogus_doctype(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
            }
        }
    }

    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_system_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.switch_to(TokenizerState::AfterDoctypeSystemIdentifier);
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.current_doctype().append_to_system_identifier('\u{FFFD}');
            }
            Some('>') => {
                self.emit_doctype_with_error(ParseErrorKind::AbruptDoctypeSystemIdentifier);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(c) => {
                self.current_doctype().append_to_system_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "Anything else - This is an unexpected-character-after-doctype-system-identifier
            // parse error. Reconsume in the bogus DOCTYPE state. (This does not set the current
            // DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.parse_error(ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit the DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error. Ignore the character."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
            }
            // "EOF - Emit the DOCTYPE token. Emit an end-of-file token."
            None => {
                self.emit_token();
                self.emit_eof_token();
            }
            // "Anything else - Ignore the character."
            Some(_) => {}
        }
    }

    /// "Create a new DOCTYPE token."
    fn create_doctype_token(&mut self) {
        self.current_token = Some(Token::Doctype(DoctypeToken::new_in_quirks_mode()));
    }

    /// "Set the current DOCTYPE token's public identifier to the empty string
    /// (not missing), then switch to the DOCTYPE public identifier (double-quoted
    /// or single-quoted) state."
    fn begin_public_identifier(&mut self, quote: char) {
        self.current_doctype().start_public_identifier();
        if quote == '"' {
            self.switch_to(TokenizerState::DoctypePublicIdentifierDoubleQuoted);
        } else {
            self.switch_to(TokenizerState::DoctypePublicIdentifierSingleQuoted);
        }
    }

    /// Same as [`Self::begin_public_identifier`], for the system identifier.
    fn begin_system_identifier(&mut self, quote: char) {
        self.current_doctype().start_system_identifier();
        if quote == '"' {
            self.switch_to(TokenizerState::DoctypeSystemIdentifierDoubleQuoted);
        } else {
            self.switch_to(TokenizerState::DoctypeSystemIdentifierSingleQuoted);
        }
    }

    /// "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
    /// force-quirks flag to on. Emit the current DOCTYPE token. Emit an
    /// end-of-file token."
    fn emit_doctype_at_eof(&mut self) {
        self.parse_error(ParseErrorKind::EofInDoctype);
        self.current_doctype().set_force_quirks();
        self.emit_token();
        self.emit_eof_token();
    }

    /// "This is a ... parse error. Set the current DOCTYPE token's force-quirks
    /// flag to on. Switch to the data state. Emit the current DOCTYPE token."
    fn emit_doctype_with_error(&mut self, kind: ParseErrorKind) {
        self.parse_error(kind);
        self.current_doctype().set_force_quirks();
        self.switch_to(TokenizerState::Data);
        self.emit_token();
    }

    /// "This is a ... parse error. Set the current DOCTYPE token's force-quirks
    /// flag to on. Reconsume in the bogus DOCTYPE state."
    fn bogus_doctype(&mut self, kind: ParseErrorKind) {
        self.parse_error(kind);
        self.current_doctype().set_force_quirks();
        self.reconsume_in(TokenizerState::BogusDoctype);
    }
}
