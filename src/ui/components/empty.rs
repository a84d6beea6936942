//! Empty state component renderer.

use crate::ui::helpers::{center_offset, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered on `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate_to_width(&empty.message, cols);
    let padding = center_offset(display_width(&message), cols);

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(padding));
    out.push_str(Theme::italic());
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&message);
    out.push_str(Theme::reset());
}
