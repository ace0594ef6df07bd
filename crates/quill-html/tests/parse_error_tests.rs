//! Integration tests for parse error reporting and tokenizer configuration.

use quill_html::{HTMLTokenizer, ParseError, ParseErrorKind, Token, TokenizerConfig};

/// Helper to run a tokenizer to completion and return the error codes it recorded
fn error_kinds(input: &str) -> Vec<ParseErrorKind> {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    for _ in tokenizer.by_ref() {}
    tokenizer.errors().iter().map(|error| error.kind).collect()
}

#[test]
fn test_well_formed_input_has_no_errors() {
    let html = "<!DOCTYPE html><html lang=\"en\"><body><p class=a>Hi &amp; bye</p><br/><!-- ok --></body></html>";
    assert_eq!(error_kinds(html), []);
}

#[test]
fn test_tag_errors() {
    let cases: &[(&str, &[ParseErrorKind])] = &[
        ("<html lang='en' lang='br'>", &[ParseErrorKind::DuplicateAttribute]),
        (
            "</div id=\"x\"/>",
            &[
                ParseErrorKind::EndTagWithTrailingSolidus,
                ParseErrorKind::EndTagWithAttributes,
            ],
        ),
        ("</>", &[ParseErrorKind::MissingEndTagName]),
        ("<>", &[ParseErrorKind::InvalidFirstCharacterOfTagName]),
        ("</3>", &[ParseErrorKind::InvalidFirstCharacterOfTagName]),
        ("<?php ?>", &[ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName]),
        ("<", &[ParseErrorKind::EofBeforeTagName]),
        ("</", &[ParseErrorKind::EofBeforeTagName]),
        ("<div", &[ParseErrorKind::EofInTag]),
        ("<a b=>", &[ParseErrorKind::MissingAttributeValue]),
        (
            "<a b=\"1\"c=\"2\">",
            &[ParseErrorKind::MissingWhitespaceBetweenAttributes],
        ),
        ("<a =b>", &[ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName]),
        ("<a b\"c>", &[ParseErrorKind::UnexpectedCharacterInAttributeName]),
        (
            "<a b=c=d>",
            &[ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue],
        ),
        ("<a / b>", &[ParseErrorKind::UnexpectedSolidusInTag]),
        ("a\0", &[ParseErrorKind::UnexpectedNullCharacter]),
    ];
    for (input, expected) in cases {
        assert_eq!(error_kinds(input), *expected, "errors for {input:?}");
    }
}

#[test]
fn test_comment_errors() {
    let cases: &[(&str, &[ParseErrorKind])] = &[
        ("<!-->", &[ParseErrorKind::AbruptClosingOfEmptyComment]),
        ("<!--->", &[ParseErrorKind::AbruptClosingOfEmptyComment]),
        ("<!-- x", &[ParseErrorKind::EofInComment]),
        ("<!--x--!>", &[ParseErrorKind::IncorrectlyClosedComment]),
        ("<!--a<!--b-->", &[ParseErrorKind::NestedComment]),
        ("<!x>", &[ParseErrorKind::IncorrectlyOpenedComment]),
        ("<![CDATA[x]]>", &[ParseErrorKind::CdataInHtmlContent]),
    ];
    for (input, expected) in cases {
        assert_eq!(error_kinds(input), *expected, "errors for {input:?}");
    }
}

#[test]
fn test_doctype_errors() {
    let cases: &[(&str, &[ParseErrorKind])] = &[
        ("<!DOCTYPE>", &[ParseErrorKind::MissingDoctypeName]),
        ("<!DOCTYPE html", &[ParseErrorKind::EofInDoctype]),
        ("<!DOCTYPEhtml>", &[ParseErrorKind::MissingWhitespaceBeforeDoctypeName]),
        (
            "<!DOCTYPE html foo>",
            &[ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName],
        ),
        (
            "<!DOCTYPE html PUBLIC\"x\">",
            &[ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword],
        ),
        (
            "<!DOCTYPE html PUBLIC>",
            &[ParseErrorKind::MissingDoctypePublicIdentifier],
        ),
        (
            "<!DOCTYPE html PUBLIC x>",
            &[ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier],
        ),
        (
            "<!DOCTYPE html PUBLIC \"x>",
            &[ParseErrorKind::AbruptDoctypePublicIdentifier],
        ),
        (
            "<!DOCTYPE html PUBLIC \"x\"\"y\">",
            &[ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers],
        ),
        (
            "<!DOCTYPE html PUBLIC \"x\" y>",
            &[ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier],
        ),
        (
            "<!DOCTYPE html SYSTEM'x'>",
            &[ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword],
        ),
        (
            "<!DOCTYPE html SYSTEM>",
            &[ParseErrorKind::MissingDoctypeSystemIdentifier],
        ),
        (
            "<!DOCTYPE html SYSTEM 'x>",
            &[ParseErrorKind::AbruptDoctypeSystemIdentifier],
        ),
        (
            "<!DOCTYPE html SYSTEM 'x' y>",
            &[ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier],
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(error_kinds(input), *expected, "errors for {input:?}");
    }
}

#[test]
fn test_doctype_recoveries_force_quirks() {
    for input in [
        "<!DOCTYPE>",
        "<!DOCTYPE html",
        "<!DOCTYPE html foo>",
        "<!DOCTYPE html PUBLIC>",
        "<!DOCTYPE html SYSTEM>",
        "<!DOCTYPE html PUBLIC \"x>",
    ] {
        let token = quill_html::create_token_from_string(input);
        assert!(token.quirks_required(), "{input} should require quirks mode");
    }
}

#[test]
fn test_error_position() {
    let mut tokenizer = HTMLTokenizer::new("ab</>".to_string());
    let _ = tokenizer.next_token();
    assert_eq!(
        tokenizer.errors(),
        [ParseError {
            kind: ParseErrorKind::MissingEndTagName,
            position: 5,
        }]
    );
}

#[test]
fn test_error_position_counts_carriage_returns() {
    let input = "a\r\nb\r\n</>";
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    let _ = tokenizer.next_token();
    assert_eq!(tokenizer.errors()[0].kind, ParseErrorKind::MissingEndTagName);
    assert_eq!(tokenizer.errors()[0].position, input.len());
}

#[test]
fn test_unquoted_value_before_self_closing_has_no_error() {
    assert_eq!(error_kinds("<br class=x/>"), []);
    assert_eq!(
        error_kinds("</br class=x/>"),
        [
            ParseErrorKind::EndTagWithTrailingSolidus,
            ParseErrorKind::EndTagWithAttributes,
        ]
    );
}

#[test]
fn test_errors_are_reported_as_they_happen() {
    let mut tokenizer = HTMLTokenizer::new("<a b=1 b=2><c d=>".to_string());
    let first = tokenizer.next_token();
    assert_eq!(first.attribute_value("b"), Some("1"));
    assert_eq!(tokenizer.errors().len(), 1);
    let _ = tokenizer.next_token();
    assert_eq!(tokenizer.errors().len(), 2);
}

#[test]
fn test_take_errors_drains_the_list() {
    let mut tokenizer = HTMLTokenizer::new("<!DOCTYPE><x y y>".to_string());
    let _ = tokenizer.next_token();
    let taken = tokenizer.take_errors();
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0].kind, ParseErrorKind::MissingDoctypeName);
    assert!(tokenizer.errors().is_empty());

    let _ = tokenizer.next_token();
    assert_eq!(tokenizer.errors()[0].kind, ParseErrorKind::DuplicateAttribute);
}

#[test]
fn test_parse_error_display() {
    let mut tokenizer = HTMLTokenizer::new("<!--->".to_string());
    let _ = tokenizer.next_token();
    assert_eq!(
        tokenizer.errors()[0].to_string(),
        "abrupt-closing-of-empty-comment at byte 6"
    );
}

#[test]
fn test_collecting_errors_can_be_disabled() {
    let config = TokenizerConfig {
        collect_parse_errors: false,
        ..TokenizerConfig::default()
    };
    let mut tokenizer = HTMLTokenizer::with_config("<a b b></a c>".to_string(), config);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokenizer.errors().is_empty());
}

#[test]
fn test_attribute_values_can_keep_their_case() {
    let config = TokenizerConfig {
        fold_attribute_values: false,
        ..TokenizerConfig::default()
    };
    let mut tokenizer = HTMLTokenizer::with_config("<html lAnG='eN'>".to_string(), config);
    let token = tokenizer.next_token();
    assert_eq!(token.attribute_value("lang"), Some("eN"));
    assert!(!tokenizer.config().fold_attribute_values);
}

#[test]
fn test_default_config() {
    let config = TokenizerConfig::default();
    assert!(config.fold_attribute_values);
    assert!(config.collect_parse_errors);
}
