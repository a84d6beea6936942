//! Tab bar component renderer.

use crate::ui::helpers::{display_width, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabInfo;

/// Renders the view tabs on a single row.
///
/// The current view is bold in the accent color; the other is dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tabs(out: &mut String, row: usize, tabs: &[TabInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let mut used = 0;
    for (index, tab) in tabs.iter().enumerate() {
        if index > 0 {
            out.push_str(&Theme::fg(&theme.colors.border));
            out.push_str(" │ ");
            out.push_str(Theme::reset());
            used += 3;
        }

        let text = if tab.is_current {
            format!(" ● {} ", tab.label)
        } else {
            format!(" ○ {} ", tab.label)
        };

        if tab.is_current {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.accent));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&text);
        out.push_str(Theme::reset());
        used += display_width(&text);
    }

    pad_line(out, used, cols);
    row + 1
}
