//! Shared text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut a string to at most `max_cols` display columns.
///
/// Wide characters that would straddle the limit are dropped entirely.
pub fn truncate_to_width(s: &str, max_cols: usize) -> &str {
    if s.width() <= max_cols {
        return s;
    }
    let mut cols = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if cols + w > max_cols {
            return &s[..idx];
        }
        cols += w;
    }
    s
}

/// Greedy word wrap to `width` display columns.
///
/// Words longer than a line are hard-split. Always returns at least one line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_cols = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_cols = word.width();
            let gap = usize::from(current_cols > 0);

            if current_cols + gap + word_cols <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_cols += gap + word_cols;
                break;
            }

            if current_cols > 0 {
                lines.push(std::mem::take(&mut current));
                current_cols = 0;
                continue;
            }

            // Word alone is wider than the line
            let head = truncate_to_width(word, width);
            let head = if head.is_empty() {
                // Single glyph wider than the line; emit it anyway
                let end = word.chars().next().map(char::len_utf8).unwrap_or(word.len());
                &word[..end]
            } else {
                head
            };
            lines.push(head.to_string());
            word = &word[head.len()..];
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Number of lines `text` occupies when wrapped to `width`
pub fn wrapped_height(text: &str, width: usize) -> u16 {
    wrap_words(text, width).len().min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_counts_columns_not_bytes() {
        // Each CJK glyph is two columns wide
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("TECH • INNOVATION", 6), "TECH •");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_words("IT'S YOUR WORLD WE'RE JUST BUILDING IT", 16);
        assert_eq!(lines, vec!["IT'S YOUR WORLD", "WE'RE JUST", "BUILDING IT"]);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let lines = wrap_words("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_empty_is_one_blank_line() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
        assert_eq!(wrapped_height("   ", 10), 1);
    }
}
