//! Numeric literal detection for unquoted CSV cells
//!
//! The test is permissive: an optional sign, digits with an optional
//! fractional part (or a bare fraction like `.5`), and an optional exponent.
//! Surrounding whitespace is already trimmed by the tokenizer.

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("Invalid numeric literal regex")
});

/// True when `text` reads as a decimal number
pub fn is_numeric_literal(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(text)
}

/// Parse `text` as a finite number when it is a numeric literal
pub fn coerce_number(text: &str) -> Option<f64> {
    if !is_numeric_literal(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_forms() {
        for text in ["0", "42", "-3", "+7", "3.14", "5.", ".5", "1e3", "-2.5E-2", "007"] {
            assert!(is_numeric_literal(text), "{text} should be numeric");
        }
    }

    #[test]
    fn test_rejects_text() {
        for text in ["", "-", ".", "abc", "12abc", "1,000", "1.2.3", "NaN", "Infinity", "e5"] {
            assert!(!is_numeric_literal(text), "{text} should not be numeric");
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("28.5"), Some(28.5));
        assert_eq!(coerce_number("007"), Some(7.0));
        assert_eq!(coerce_number("n/a"), None);
        assert_eq!(coerce_number("1e999"), None);
    }
}
