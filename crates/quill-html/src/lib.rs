//! HTML tokenizer for the Quill parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, tag, and attribute states
//!   - DOCTYPE handling, including the quirks-mode flag
//!   - Comment and bogus comment states
//!   - Parse error reporting with the WHATWG error codes
//!
//! Newlines are normalised before tokenizing
//! ([§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)).
//!
//! # Not Yet Implemented
//!
//! - RCDATA, RAWTEXT, script data and PLAINTEXT states
//! - Character references (`&` is emitted as text)
//! - CDATA sections in foreign content
//! - Tree construction

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, AttributeMap, DoctypeToken, EndTagToken, HTMLTokenizer, ParseError,
    ParseErrorKind, StartTagToken, Token, TokenKind, TokenKindMismatch, TokenizerConfig,
    TokenizerState, create_token_from_string, tokenize,
};
