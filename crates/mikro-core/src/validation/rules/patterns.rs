//! Regex patterns for raw account input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whitespace as ECMAScript `\s` defines it: ASCII spaces, the Unicode
    /// space separators, line and paragraph separators and the BOM.
    /// U+0085 (NEL) is not included.
    pub static ref WHITESPACE: Regex = Regex::new(
        r"[\t\n\v\f\r \x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]"
    ).unwrap();

    /// A non-empty run of ASCII digits and nothing else.
    pub static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Remove every whitespace character from the input.
pub fn sanitize(raw: &str) -> String {
    WHITESPACE.replace_all(raw, "").into_owned()
}

/// Check that the text is non-empty and made only of ASCII digits.
pub fn is_digits_only(text: &str) -> bool {
    DIGITS_ONLY.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(" 10 1010\t0071\n"), "1010100071");
        assert_eq!(sanitize("12\u{00a0}34"), "1234");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_sanitize_unicode_spaces() {
        assert_eq!(sanitize("\u{feff}1234"), "1234"); // BOM from pasted text
        assert_eq!(sanitize("12\u{2009}34\u{3000}"), "1234");
        assert_eq!(sanitize("12\u{2028}34\u{000b}"), "1234");
        // NEL is kept and later fails the digit check
        assert_eq!(sanitize("1234\u{0085}"), "1234\u{0085}");
        assert!(!is_digits_only(&sanitize("1234\u{0085}")));
    }

    #[test]
    fn test_is_digits_only() {
        assert!(is_digits_only("0123456789"));
        assert!(!is_digits_only(""));
        assert!(!is_digits_only("12A4"));
        assert!(!is_digits_only("12-34"));
        assert!(!is_digits_only("١٢٣"));
    }
}
