//! Task list component renderer.
//!
//! Each row shows a cursor marker, a colored priority badge and the task
//! content. Completed tasks are struck through; the selected row is painted
//! with the selection colors across the full width.

use crate::ui::helpers::{display_width, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders all rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_task_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_task_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Layout
///
/// ```text
/// > [P1]  content [padding to fill line]
/// ```
fn render_task_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = |out: &mut String| {
        if item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else if item.completed {
            out.push_str(&Theme::fg(&theme.colors.completed_fg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
    };

    base(out);
    if item.is_selected {
        out.push_str(Theme::bold());
        out.push_str("> ");
    } else {
        out.push_str("  ");
    }
    out.push(' ');

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(theme.colors.priority(item.priority)));
    out.push('[');
    out.push_str(item.priority.as_str());
    out.push(']');
    out.push_str(Theme::reset());

    base(out);
    out.push_str("  ");
    if item.completed {
        out.push_str(Theme::strikethrough());
    }
    out.push_str(&item.content);
    if item.completed {
        // end strikethrough only, keep the row colors for the padding
        out.push_str("\u{1b}[29m");
    }

    let used = 9 + display_width(&item.content);
    pad_line(out, used, cols);
    out.push_str(Theme::reset());
    row + 1
}
