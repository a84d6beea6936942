//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{center_offset, display_width, pad_line, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. If the
/// help text exceeds terminal width, it is truncated to fit.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_to_width(&footer.keybindings, cols);
    let text_width = display_width(&help_text);
    let padding = center_offset(text_width, cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::italic());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(padding));
    out.push_str(&help_text);
    pad_line(out, padding + text_width, cols);
    out.push_str(Theme::reset());
    row + 1
}
