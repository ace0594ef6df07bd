//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Insertion-ordered, name-unique attribute storage.
pub mod attributes;
mod comment;
/// Tokenizer options.
pub mod config;
/// HTML tokenizer state machine implementation.
pub mod core;
mod doctype;
/// Parse errors and token conversion errors.
pub mod error;
mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::attributes::{Attribute, AttributeMap};
pub use self::config::TokenizerConfig;
pub use self::core::{HTMLTokenizer, TokenizerState};
pub use self::error::{ParseError, ParseErrorKind, TokenKindMismatch};
pub use self::token::{DoctypeToken, EndTagToken, StartTagToken, Token, TokenKind};

/// Tokenize `markup` and return the first completed token.
///
/// Text before the first tag comes back as a single `Character` token.
/// Input that never completes a token, such as an unterminated tag,
/// yields [`Token::EndOfFile`].
///
/// ```
/// use quill_html::{Token, create_token_from_string};
///
/// let token = create_token_from_string("<HtMl lang=\"en\">");
/// assert_eq!(token.tag_name(), "html");
/// assert_eq!(token.attribute_value("lang"), Some("en"));
///
/// assert_eq!(create_token_from_string("<div"), Token::EndOfFile);
/// ```
#[must_use]
pub fn create_token_from_string(markup: &str) -> Token {
    HTMLTokenizer::new(markup.to_owned()).next_token()
}

/// Tokenize `markup` lazily.
///
/// The returned tokenizer is an iterator over every token in the input,
/// ending with exactly one [`Token::EndOfFile`].
///
/// ```
/// use quill_html::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("<p>Hi</p>").map(|token| token.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::StartTag, TokenKind::Character, TokenKind::EndTag, TokenKind::EndOfFile]
/// );
/// ```
#[must_use]
pub fn tokenize(markup: &str) -> HTMLTokenizer {
    HTMLTokenizer::new(markup.to_owned())
}
