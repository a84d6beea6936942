//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across components. Widths are measured in
//! terminal cells with `unicode-width`, so wide characters (CJK, emoji) pad and
//! truncate correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Appends a cursor-positioning escape for `row`, `col` (both 1-indexed).
///
/// # Example
///
/// ```rust
/// use justdo::ui::helpers::position_cursor;
///
/// let mut out = String::new();
/// position_cursor(&mut out, 5, 1);
/// assert_eq!(out, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` so it occupies at most `max` cells, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use justdo::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("write report", 8), "write r…");
/// assert_eq!(truncate_to_width("short", 8), "short");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Appends spaces so a line that already used `used` cells fills `cols`.
pub fn pad_line(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}

/// Left padding that centers content of `width` cells within `cols`.
#[must_use]
pub const fn center_offset(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn padding_and_centering() {
        let mut out = String::new();
        pad_line(&mut out, 3, 6);
        assert_eq!(out, "   ");
        pad_line(&mut out, 10, 6);
        assert_eq!(out, "   ");
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(20, 10), 0);
    }
}
