//! Line normalization.
//!
//! Sanitizes raw input before scanning: U+0000 is replaced with the
//! REPLACEMENT CHARACTER (U+FFFD) so no null byte survives to downstream
//! consumers, and every line ending (CRLF, bare CR, or LF) is unified to LF.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line ending is a newline (U+000A), a carriage return (U+000D) not
/// followed by a newline, or a carriage return and a following newline.
static LINE_ENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());

/// Normalize raw source text.
///
/// Total over any input, including the empty string.
pub fn normalize(source: &str) -> String {
    let replaced = source.replace('\0', "\u{FFFD}");
    LINE_ENDING.replace_all(&replaced, "\n").into_owned()
}

/// Split normalized text into its ordered line sequence.
///
/// The final element may represent an unterminated trailing line; empty
/// input yields a single empty line.
pub fn lines(normalized: &str) -> Vec<&str> {
    normalized.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_replaced() {
        let normalized = normalize("foo\0bar");
        assert_eq!(normalized, "foo\u{FFFD}bar");
        assert!(!normalized.contains('\0'));
    }

    #[test]
    fn test_crlf_unified() {
        assert_eq!(normalize("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_bare_cr_unified() {
        assert_eq!(normalize("a\rb"), "a\nb");
    }

    #[test]
    fn test_mixed_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_empty_input_yields_single_empty_line() {
        let normalized = normalize("");
        assert_eq!(lines(&normalized), vec![""]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty_line() {
        let normalized = normalize("a\n");
        assert_eq!(lines(&normalized), vec!["a", ""]);
    }
}
