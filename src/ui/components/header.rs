//! Header component renderer.
//!
//! This module renders the title block: a bold title bar with theme-aware
//! colors and optional background, followed by an italic subtitle.

use crate::ui::helpers::{center_offset, display_width, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {} ", header.title);
    let title_width = display_width(&title);
    let padding = center_offset(title_width, cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&" ".repeat(padding));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&title);
    out.push_str(Theme::reset());
    pad_line(out, padding + title_width, cols);

    let subtitle_width = display_width(&header.subtitle);
    let padding = center_offset(subtitle_width, cols);

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::italic());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&" ".repeat(padding));
    out.push_str(&header.subtitle);
    out.push_str(Theme::reset());

    row + 2
}
