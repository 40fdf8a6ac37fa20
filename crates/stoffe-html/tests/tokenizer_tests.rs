//! Integration tests for the HTML fragment tokenizer.

use pretty_assertions::assert_eq;
use stoffe_html::{Attribute, HTMLTokenizer, Token};

/// Helper to tokenize input and return the token stream.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper to collect the character tokens into a string.
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

/// Helper to get the attributes of the first start tag.
fn first_start_tag_attributes(tokens: &[Token]) -> Vec<Attribute> {
    tokens
        .iter()
        .find_map(|t| match t {
            Token::StartTag { attributes, .. } => Some(attributes.clone()),
            _ => None,
        })
        .expect("no start tag")
}

fn attr(name: &str, value: &str) -> Attribute {
    Attribute::new(name.to_string(), value.to_string())
}

#[test]
fn test_link_with_attributes() {
    let tokens = tokenize(r#"<a class="text-link" href="http://evil" onclick="bad()">bar</a>"#);

    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "a".to_string(),
                self_closing: false,
                attributes: vec![
                    attr("class", "text-link"),
                    attr("href", "http://evil"),
                    attr("onclick", "bad()"),
                ],
            },
            Token::Character { data: 'b' },
            Token::Character { data: 'a' },
            Token::Character { data: 'r' },
            Token::EndTag {
                name: "a".to_string(),
                attributes: vec![],
            },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_tag_and_attribute_names_are_lowercased() {
    let tokens = tokenize("<A HREF='x' Target=_blank>");
    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "a"));
    assert_eq!(
        first_start_tag_attributes(&tokens),
        vec![attr("href", "x"), attr("target", "_blank")]
    );
}

#[test]
fn test_attribute_without_value() {
    let tokens = tokenize("<input disabled value=1>");
    assert_eq!(
        first_start_tag_attributes(&tokens),
        vec![attr("disabled", ""), attr("value", "1")]
    );
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let mut tokenizer = HTMLTokenizer::new(r#"<a href="1" href="2">"#.to_string());
    tokenizer.run();
    assert!(tokenizer.errors().iter().any(|e| e.code == "duplicate-attribute"));
    assert_eq!(
        first_start_tag_attributes(&tokenizer.into_tokens()),
        vec![attr("href", "1")]
    );
}

#[test]
fn test_self_closing_flag() {
    let tokens = tokenize("<br/>");
    assert!(matches!(
        &tokens[0],
        Token::StartTag { name, self_closing: true, .. } if name == "br"
    ));
}

#[test]
fn test_character_references_in_text() {
    let tokens = tokenize("a &amp; b &#60; &#x3e; &bogus; &");
    assert_eq!(text_of(&tokens), "a & b < > &bogus; &");
}

#[test]
fn test_invalid_numeric_reference_is_replaced() {
    let tokens = tokenize("&#0;&#x110000;&#;");
    assert_eq!(text_of(&tokens), "\u{FFFD}\u{FFFD}&#;");
}

#[test]
fn test_character_references_in_attribute() {
    let tokens = tokenize(r#"<a href="?a=1&copy=2&amp;b=3" title="&amp=x&quot;">"#);
    assert_eq!(
        first_start_tag_attributes(&tokens),
        vec![attr("href", "?a=1&copy=2&b=3"), attr("title", "&amp=x\"")]
    );
}

#[test]
fn test_less_than_not_followed_by_tag_is_text() {
    let tokens = tokenize("1 < 2");
    assert_eq!(text_of(&tokens), "1 < 2");
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hi -->x");
    assert_eq!(
        tokens,
        vec![
            Token::Comment {
                data: " hi ".to_string()
            },
            Token::Character { data: 'x' },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_doctype_becomes_bogus_comment() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "DOCTYPE html".to_string()
        }
    );
}

#[test]
fn test_script_content_is_raw_text() {
    let tokens = tokenize(r#"<script>alert("<a>")</script>x"#);
    assert_eq!(text_of(&tokens), r#"alert("<a>")x"#);
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::EndTag { name, .. } if name == "script")));
    assert!(!tokens
        .iter()
        .any(|t| matches!(t, Token::StartTag { name, .. } if name == "a")));
}

#[test]
fn test_unterminated_tag_is_dropped() {
    let mut tokenizer = HTMLTokenizer::new(r#"<a href="x"#.to_string());
    tokenizer.run();
    assert!(tokenizer.errors().iter().any(|e| e.code == "eof-in-tag"));
    assert_eq!(tokenizer.into_tokens(), vec![Token::EndOfFile]);
}

#[test]
fn test_token_display() {
    let tokens = tokenize(r#"<a href="x"><br/>"#);
    assert_eq!(tokens[0].to_string(), r#"<a href="x">"#);
    assert_eq!(tokens[1].to_string(), "<br />");
    assert_eq!(tokens[2].to_string(), "EOF");
    assert_eq!(Token::Character { data: '\n' }.to_string(), r#""\n""#);
}
