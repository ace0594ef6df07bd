//! Integration tests for the HTML tokenizer.

use quill_html::{
    DoctypeToken, HTMLTokenizer, StartTagToken, Token, TokenKind, create_token_from_string,
    tokenize,
};

/// Helper to tokenize a string and return every token, EOF included
fn collect_tokens(input: &str) -> Vec<Token> {
    tokenize(input).collect()
}

// =============================================================================
// DOCTYPE
// =============================================================================

#[test]
fn test_doctype_html() {
    let token = create_token_from_string("<!DOCTYPE html>");
    match &token {
        Token::Doctype(doctype) => {
            assert!(doctype.is_name_set());
            assert_eq!(doctype.name(), Some("html"));
            assert!(!doctype.quirks_required());
            assert!(!doctype.is_public_identifier_set());
            assert!(!doctype.is_system_identifier_set());
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_without_name() {
    let token = create_token_from_string("<!DOCTYPE>");
    assert_eq!(token.kind(), TokenKind::Doctype);
    assert!(!token.is_name_set());
    assert_eq!(token.name(), None);
    assert!(token.quirks_required());
}

#[test]
fn test_doctype_html4_transitional() {
    let token = create_token_from_string(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">",
    );
    assert_eq!(token.name(), Some("html"));
    assert!(token.quirks_required());
    assert_eq!(
        token.public_identifier(),
        Some("-//W3C//DTD HTML 4.01 Transitional//EN")
    );
    assert_eq!(
        token.system_identifier(),
        Some("http://www.w3.org/TR/html4/loose.dtd")
    );
}

#[test]
fn test_doctype_keyword_is_case_insensitive() {
    let token = create_token_from_string("<!doctype HTML>");
    assert_eq!(token.name(), Some("html"));
    assert!(!token.quirks_required());
}

#[test]
fn test_doctype_system_identifier_only() {
    let token = create_token_from_string("<!DOCTYPE html SYSTEM 'about:legacy-compat'>");
    assert!(!token.is_public_identifier_set());
    assert_eq!(token.system_identifier(), Some("about:legacy-compat"));
    assert!(token.quirks_required());
}

#[test]
fn test_doctype_empty_public_identifier_is_set() {
    let token = create_token_from_string("<!DOCTYPE html public \"\">");
    assert!(token.is_public_identifier_set());
    assert_eq!(token.public_identifier(), Some(""));
    assert!(!token.is_system_identifier_set());
    assert!(token.quirks_required());
}

#[test]
fn test_doctype_bogus_trailing_text() {
    let tokens = collect_tokens("<!DOCTYPE html bogus>text");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].name(), Some("html"));
    assert!(tokens[0].quirks_required());
    assert!(matches!(&tokens[1], Token::Character { data } if data == "text"));
}

#[test]
fn test_doctype_missing_whitespace_before_name() {
    let token = create_token_from_string("<!DOCTYPEhtml>");
    assert_eq!(token.name(), Some("html"));
    assert!(!token.quirks_required());
}

#[test]
fn test_doctype_at_eof_forces_quirks() {
    let tokens = collect_tokens("<!DOCTYPE html");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name(), Some("html"));
    assert!(tokens[0].quirks_required());
    assert!(tokens[1].is_eof());
}

#[test]
fn test_manual_doctype() {
    let doctype = DoctypeToken::new();
    assert!(!doctype.quirks_required());
    assert!(!doctype.is_name_set());
    assert!(!doctype.is_public_identifier_set());
    assert!(!doctype.is_system_identifier_set());
}

// =============================================================================
// Start and end tags
// =============================================================================

#[test]
fn test_start_tag_mixed_case() {
    let token = create_token_from_string("<HtMl lang=\"en\">");
    match &token {
        Token::StartTag(tag) => {
            assert_eq!(tag.tag_name(), "html");
            assert_eq!(tag.attributes().len(), 1);
            assert_eq!(tag.attribute_value("lang"), Some("en"));
            assert!(!tag.is_self_closing());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_self_closing_tag() {
    let token = create_token_from_string("<br/>");
    assert_eq!(token.tag_name(), "br");
    assert!(token.is_self_closing());
}

#[test]
fn test_self_closing_tag_with_attribute() {
    let token = create_token_from_string("<area shape=\"circle\"/>");
    assert_eq!(token.tag_name(), "area");
    assert!(token.is_self_closing());
    assert_eq!(token.attribute_value("shape"), Some("circle"));
}

#[test]
fn test_img_with_three_attributes() {
    let token = create_token_from_string("<img src=\"example.png\" width='10' height='20'>");
    assert_eq!(token.tag_name(), "img");
    assert!(!token.is_self_closing());
    let attributes: Vec<(&str, &str)> = token
        .attributes()
        .iter()
        .map(|attr| (attr.name.as_str(), attr.value.as_str()))
        .collect();
    assert_eq!(
        attributes,
        [("src", "example.png"), ("width", "10"), ("height", "20")]
    );
}

#[test]
fn test_duplicate_attribute_first_wins() {
    let token = create_token_from_string("<html lang='en' lang='br'>");
    assert_eq!(token.attributes().len(), 1);
    assert_eq!(token.attribute_value("lang"), Some("en"));
}

#[test]
fn test_attribute_name_and_value_folded() {
    let token = create_token_from_string("<html lAnG='eN'>");
    assert_eq!(token.attribute_value("lang"), Some("en"));
    assert!(token.contains_attribute("lang"));
    assert!(!token.contains_attribute("lAnG"));
}

#[test]
fn test_attribute_without_value() {
    let token = create_token_from_string("<input disabled type=checkbox>");
    assert_eq!(token.attribute_value("disabled"), Some(""));
    assert_eq!(token.attribute_value("type"), Some("checkbox"));
}

#[test]
fn test_unquoted_value_before_self_closing_solidus() {
    let cases = [
        ("<a href=x/>", "href", "x"),
        ("<a b=/>", "b", ""),
        ("<br class=x/>", "class", "x"),
        ("<a href=/path/>", "href", "/path"),
    ];
    for (input, name, value) in cases {
        let token = create_token_from_string(input);
        assert_eq!(token.attribute_value(name), Some(value), "value in {input}");
        assert!(token.is_self_closing(), "{input} should be self-closing");
    }
}

#[test]
fn test_unquoted_value_keeps_inner_solidus() {
    let token = create_token_from_string("<a href=x/y>");
    assert_eq!(token.attribute_value("href"), Some("x/y"));
    assert!(!token.is_self_closing());
}

#[test]
fn test_solidus_between_attributes_is_ignored() {
    let token = create_token_from_string("<div / id=\"a\">");
    assert_eq!(token.attribute_value("id"), Some("a"));
    assert!(!token.is_self_closing());
}

#[test]
fn test_equals_sign_before_attribute_name() {
    let token = create_token_from_string("<div =x>");
    assert_eq!(token.attribute_value("=x"), Some(""));
}

#[test]
fn test_end_tag() {
    let token = create_token_from_string("</p>");
    match &token {
        Token::EndTag(tag) => {
            assert_eq!(tag.tag_name(), "p");
            assert!(!tag.is_self_closing());
        }
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_end_tag_drops_attributes_and_solidus() {
    let tokens = collect_tokens("</DIV id=\"x\"/>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].tag_name(), "div");
    assert!(!tokens[0].is_self_closing());
}

#[test]
fn test_manual_start_tag() {
    let tag = StartTagToken::default();
    assert_eq!(tag.tag_name(), "");
    assert!(tag.attributes().is_empty());
    assert!(!tag.is_self_closing());
}

#[test]
fn test_null_in_tag_name_is_replaced() {
    let token = create_token_from_string("<a\0b>");
    assert_eq!(token.tag_name(), "a\u{FFFD}b");
}

// =============================================================================
// Character data
// =============================================================================

#[test]
fn test_plain_text_is_one_token() {
    let tokens = collect_tokens("Hello");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "Hello"));
    assert!(tokens[1].is_eof());
}

#[test]
fn test_ampersand_is_literal() {
    let token = create_token_from_string("a &amp; b");
    assert!(matches!(&token, Token::Character { data } if data == "a &amp; b"));
}

#[test]
fn test_stray_less_than_sign_is_text() {
    let tokens = collect_tokens("a < b<p>");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "a < b"));
    assert_eq!(tokens[1].tag_name(), "p");
}

#[test]
fn test_lone_less_than_sign_at_eof() {
    let token = create_token_from_string("<");
    assert!(matches!(&token, Token::Character { data } if data == "<"));
}

#[test]
fn test_newlines_are_normalised() {
    let token = create_token_from_string("a\r\nb\rc");
    assert!(matches!(&token, Token::Character { data } if data == "a\nb\nc"));
}

#[test]
fn test_null_character_passes_through() {
    let token = create_token_from_string("a\0b");
    assert!(matches!(&token, Token::Character { data } if data == "a\0b"));
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn test_comment() {
    let token = create_token_from_string("<!-- hello -->");
    assert!(matches!(&token, Token::Comment { data } if data == " hello "));
}

#[test]
fn test_empty_comments() {
    for input in ["<!---->", "<!-->", "<!--->"] {
        let token = create_token_from_string(input);
        assert!(
            matches!(&token, Token::Comment { data } if data.is_empty()),
            "{input} should be an empty comment, got {token}"
        );
    }
}

#[test]
fn test_comment_with_dashes_inside() {
    let token = create_token_from_string("<!--a-b--c--->");
    assert!(matches!(&token, Token::Comment { data } if data == "a-b--c-"));
}

#[test]
fn test_comment_closed_with_bang() {
    let token = create_token_from_string("<!--a--!>");
    assert!(matches!(&token, Token::Comment { data } if data == "a"));
}

#[test]
fn test_nested_comment_opener_is_kept() {
    let token = create_token_from_string("<!--a<!--b-->");
    assert!(matches!(&token, Token::Comment { data } if data == "a<!--b"));
}

#[test]
fn test_comment_at_eof() {
    let tokens = collect_tokens("<!-- open");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " open"));
    assert!(tokens[1].is_eof());
}

#[test]
fn test_processing_instruction_is_bogus_comment() {
    let token = create_token_from_string("<?xml version=\"1.0\"?>");
    assert!(matches!(&token, Token::Comment { data } if data == "?xml version=\"1.0\"?"));
}

#[test]
fn test_markup_declaration_is_bogus_comment() {
    let token = create_token_from_string("<!ELEMENT br EMPTY>");
    assert!(matches!(&token, Token::Comment { data } if data == "ELEMENT br EMPTY"));
}

#[test]
fn test_cdata_is_bogus_comment() {
    let token = create_token_from_string("<![CDATA[x < y]]>");
    assert!(matches!(&token, Token::Comment { data } if data == "[CDATA[x < y]]"));
}

#[test]
fn test_bad_end_tag_is_bogus_comment() {
    let token = create_token_from_string("</3 >");
    assert!(matches!(&token, Token::Comment { data } if data == "3 "));
}

// =============================================================================
// End of input
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(create_token_from_string(""), Token::EndOfFile);
    assert_eq!(collect_tokens(""), [Token::EndOfFile]);
}

#[test]
fn test_unterminated_tag_yields_eof() {
    assert_eq!(create_token_from_string("<div class=\"a"), Token::EndOfFile);
    assert_eq!(create_token_from_string("<img src=x"), Token::EndOfFile);
    assert_eq!(create_token_from_string("<br/"), Token::EndOfFile);
}

#[test]
fn test_end_tag_open_at_eof() {
    let token = create_token_from_string("</");
    assert!(matches!(&token, Token::Character { data } if data == "</"));
}

#[test]
fn test_missing_end_tag_name_is_dropped() {
    let tokens = collect_tokens("a</>b");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "ab"));
}

// =============================================================================
// Streaming
// =============================================================================

#[test]
fn test_stream_paragraph() {
    let tokens = collect_tokens("<p>Hi</p>");
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::StartTag,
            TokenKind::Character,
            TokenKind::EndTag,
            TokenKind::EndOfFile
        ]
    );
    assert!(matches!(&tokens[1], Token::Character { data } if data == "Hi"));
}

#[test]
fn test_stream_document() {
    let html = "<!DOCTYPE html>\n<html>\n<!-- c -->\n<body class=main>Text</body>\n</html>";
    let rendered: Vec<String> = tokenize(html).map(|token| token.to_string()).collect();
    assert_eq!(
        rendered,
        [
            "DOCTYPE html",
            "Character(\"\\n\")",
            "<html>",
            "Character(\"\\n\")",
            "<!-- c -->",
            "Character(\"\\n\")",
            "<body class=\"main\">",
            "Character(\"Text\")",
            "</body>",
            "Character(\"\\n\")",
            "</html>",
            "EOF",
        ]
    );
}

#[test]
fn test_iterator_is_fused_after_eof() {
    let mut tokenizer = tokenize("<p>");
    assert_eq!(tokenizer.next().map(|token| token.kind()), Some(TokenKind::StartTag));
    assert_eq!(tokenizer.next(), Some(Token::EndOfFile));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_next_token_repeats_eof() {
    let mut tokenizer = HTMLTokenizer::new("x".to_string());
    assert_eq!(tokenizer.next_token().kind(), TokenKind::Character);
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(), Token::EndOfFile);
    }
}

#[test]
fn test_position_tracks_consumed_input() {
    let mut tokenizer = HTMLTokenizer::new("<a><b>".to_string());
    let _ = tokenizer.next_token();
    assert_eq!(tokenizer.position(), 3);
    let _ = tokenizer.next_token();
    assert_eq!(tokenizer.position(), 6);
}

#[test]
fn test_position_is_an_offset_into_the_original_input() {
    let input = "<p\r\n>x";
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    assert_eq!(tokenizer.next_token().tag_name(), "p");
    assert_eq!(tokenizer.position(), 5);
    assert_eq!(&input[tokenizer.position()..], "x");
    assert_eq!(tokenizer.remaining_input(), "x");
}

#[test]
fn test_checked_conversions() {
    let token = create_token_from_string("<br/>");
    assert!(token.as_doctype().is_none());
    assert!(token.as_end_tag().is_none());
    let tag = StartTagToken::try_from(token).expect("start tag");
    assert!(tag.is_self_closing());

    let error = DoctypeToken::try_from(create_token_from_string("</p>")).unwrap_err();
    assert_eq!(error.to_string(), "expected a doctype token, found a end-tag token");
}

#[test]
#[should_panic(expected = "tag_name called on a comment token")]
fn test_tag_name_on_comment_panics() {
    let _ = create_token_from_string("<!-- x -->").tag_name();
}
