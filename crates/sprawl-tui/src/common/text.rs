//! Text utilities for TUI rendering.
//!
//! Shared text processing functions used across rendering paths.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters (CJK, emoji) correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Word-wraps `text` to `width` display columns.
///
/// Explicit newlines start a new line. Words wider than `width` are broken
/// by character. An empty input yields a single empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let mut pieces = hard_wrap(word, width);
                // The tail stays open so following words can join it.
                if let Some(last) = pieces.pop() {
                    lines.extend(pieces);
                    current_width = last.width();
                    current = last;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Breaks `text` into chunks no wider than `width`, keeping whitespace.
///
/// Used for preformatted text where indentation matters. Empty input yields
/// no chunks.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_exact() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        // "中文" = 4 columns
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_wrap_text_at_word_boundaries() {
        assert_eq!(
            wrap_text("one agent replaces many", 10),
            vec!["one agent", "replaces", "many"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh xy", 3), vec!["abc", "def", "gh", "xy"]);
    }

    #[test]
    fn test_wrap_text_keeps_every_piece_of_wide_words() {
        // Each CJK char is 2 columns; only one fits in 3.
        assert_eq!(wrap_text("中文字", 3), vec!["中", "文", "字"]);
        assert_eq!(wrap_text("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_text("abcdefg hi", 4), vec!["abcd", "efg", "hi"]);
    }

    #[test]
    fn test_wrap_text_long_word_tail_joins_next_word() {
        assert_eq!(wrap_text("abcde f", 3), vec!["abc", "de", "f"]);
        assert_eq!(wrap_text("abcd e", 3), vec!["abc", "d e"]);
    }

    #[test]
    fn test_hard_wrap_keeps_indentation() {
        assert_eq!(hard_wrap("    key: value", 6), vec!["    ke", "y: val", "ue"]);
        assert!(hard_wrap("", 6).is_empty());
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
