//! Tests for character-level line tokenizing

use crate::app::services::csv_parser::tokenizer::{Token, split_fields, tokenize_line};

#[test]
fn test_plain_fields() {
    assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_comma_inside_quotes_is_kept() {
    assert_eq!(split_fields(r#"1,"x,y""#), vec!["1", "x,y"]);
}

#[test]
fn test_doubled_quote_inside_quotes_is_literal() {
    assert_eq!(
        split_fields(r#"1,"she said ""hi""""#),
        vec!["1", r#"she said "hi""#]
    );
}

#[test]
fn test_empty_quoted_field_is_empty() {
    let tokens = tokenize_line(r#""",b"#);
    assert_eq!(
        tokens[0],
        Token {
            text: String::new(),
            quoted: true
        }
    );
    assert_eq!(tokens[1].text, "b");
    assert!(!tokens[1].quoted);
}

#[test]
fn test_fields_are_trimmed() {
    assert_eq!(split_fields("  a , b  ,\" c \""), vec!["a", "b", "c"]);
}

#[test]
fn test_empty_and_trailing_fields() {
    assert_eq!(split_fields("a,,c,"), vec!["a", "", "c", ""]);
    assert_eq!(split_fields(""), vec![""]);
}

#[test]
fn test_quote_mid_field_toggles_mode() {
    // The quote is consumed and the comma it guards stays in the field
    assert_eq!(split_fields(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
}

#[test]
fn test_unterminated_quote_runs_to_end_of_line() {
    assert_eq!(split_fields(r#"a,"b,c"#), vec!["a", "b,c"]);
}
