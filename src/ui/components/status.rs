//! Status line component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a transient error message at `row`.
pub fn render_status(out: &mut String, row: usize, message: &str, theme: &Theme) {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.message_fg));
    out.push_str(message);
    out.push_str(Theme::reset());
}
