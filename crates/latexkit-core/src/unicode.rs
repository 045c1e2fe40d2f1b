//! Unicode utilities for cursor arithmetic.
//!
//! Cursor offsets handed to the replacer are rune indices (counts of Unicode
//! scalar values), while Rust strings are sliced by byte. These helpers
//! convert between the two.

use unicode_width::UnicodeWidthStr;

/// Count the number of Unicode characters (runes) in a string.
///
/// # Examples
///
/// ```
/// use latexkit_core::unicode::rune_count;
///
/// assert_eq!(rune_count("\\alpha"), 6);
/// assert_eq!(rune_count("αβγ"), 3);
/// ```
pub fn rune_count(s: &str) -> usize {
    s.chars().count()
}

/// Get the display width of a string, accounting for wide characters.
///
/// Used when aligning sequence listings in a terminal.
///
/// ```
/// use latexkit_core::unicode::display_width;
///
/// assert_eq!(display_width("\\to"), 3);
/// assert_eq!(display_width("こんにちは"), 10);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Extract a substring by rune indices (not byte indices).
///
/// Out-of-range indices are clamped to the end of the string and an inverted
/// range yields an empty string. Callers that must not clamp validate first.
///
/// ```
/// use latexkit_core::unicode::rune_slice;
///
/// assert_eq!(rune_slice("x\\pi y", 1, 4), "\\pi");
/// assert_eq!(rune_slice("αβγ", 1, 3), "βγ");
/// ```
pub fn rune_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }

    let start_byte = byte_index_from_rune_index(s, start);
    let end_byte = byte_index_from_rune_index(s, end);
    &s[start_byte..end_byte]
}

/// Convert a rune index to a byte index.
///
/// Indices past the end map to `s.len()`.
///
/// ```
/// use latexkit_core::unicode::byte_index_from_rune_index;
///
/// assert_eq!(byte_index_from_rune_index("hello", 2), 2);
/// assert_eq!(byte_index_from_rune_index("αβγ", 2), 4);
/// ```
pub fn byte_index_from_rune_index(s: &str, rune_index: usize) -> usize {
    s.char_indices()
        .nth(rune_index)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_count() {
        assert_eq!(rune_count(""), 0);
        assert_eq!(rune_count("\\alpha"), 6);
        assert_eq!(rune_count("こんにちは"), 5);
        assert_eq!(rune_count("🦀🚀"), 2);
        assert_eq!(rune_count("ℝ∀∃"), 3);
        // e + combining acute accent
        assert_eq!(rune_count("e\u{0301}"), 2);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("\\alpha"), 6);
        assert_eq!(display_width("α"), 1);
        assert_eq!(display_width("世界"), 4);
        assert_eq!(display_width("a\u{200B}b"), 2);
    }

    #[test]
    fn test_rune_slice() {
        assert_eq!(rune_slice("hello", 0, 5), "hello");
        assert_eq!(rune_slice("hello", 1, 4), "ell");
        assert_eq!(rune_slice("hello", 0, 0), "");
        assert_eq!(rune_slice("こんにちは", 1, 3), "んに");
        assert_eq!(rune_slice("🦀🚀🎉", 1, 2), "🚀");
        assert_eq!(rune_slice("x→y", 1, 2), "→");

        // clamped and inverted ranges
        assert_eq!(rune_slice("hello", 10, 20), "");
        assert_eq!(rune_slice("hello", 3, 10), "lo");
        assert_eq!(rune_slice("hello", 2, 1), "");
    }

    #[test]
    fn test_byte_index_from_rune_index() {
        assert_eq!(byte_index_from_rune_index("hello", 0), 0);
        assert_eq!(byte_index_from_rune_index("hello", 5), 5);
        assert_eq!(byte_index_from_rune_index("こんにちは", 1), 3);
        assert_eq!(byte_index_from_rune_index("🦀🚀", 1), 4);
        assert_eq!(byte_index_from_rune_index("café", 4), 5);

        // out of bounds
        assert_eq!(byte_index_from_rune_index("hello", 10), 5);
        assert_eq!(byte_index_from_rune_index("", 3), 0);
    }
}
