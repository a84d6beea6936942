//! Text entry component renderer.
//!
//! Renders the create/edit form: a title, a prompt and a bordered input box
//! with a caret after the buffer text.

use crate::ui::helpers::{display_width, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EditorInfo;

/// Renders the editor starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 5, since the form uses 5 lines)
///
/// # Layout
///
/// ```text
/// ▎ Create New Task
///   Enter your task:
/// ╭──────────────────╮
/// │ buy milk│        │
/// ╰──────────────────╯
/// ```
pub fn render_editor(out: &mut String, row: usize, editor: &EditorInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(2);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str("▎ ");
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&editor.title);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str("  ");
    out.push_str(&editor.prompt);
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&format!("╭{}╮", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let content = format!(" {}│", editor.text);

    position_cursor(out, row + 3, 1);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.input_fg));
    out.push_str(&Theme::bg(&theme.colors.input_bg));
    out.push_str(&content);
    pad_line(out, display_width(&content), inner_width);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 4, 1);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&format!("╰{}╯", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 5
}
