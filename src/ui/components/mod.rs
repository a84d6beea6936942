//! Composable UI component renderers.
//!
//! Each component writes one part of the interface into the frame buffer and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`tabs`]: Active/Completed tabs with counts
//! - [`table`]: Task rows with priority badges
//! - [`editor`]: Create/edit input box
//! - [`empty`]: Empty state message for no tasks
//! - [`status`]: Transient error line
//! - [`footer`]: Help text and keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Tabs + Task list + Footer
//! - [`render_editor_mode`]: Header + Tabs + Editor + Footer

mod editor;
mod empty;
mod footer;
mod header;
mod status;
mod table;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EditorInfo, UIViewModel, TOP_CHROME_ROWS};

use editor::render_editor;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use status::render_status;
use table::render_task_rows;
use tabs::render_tabs;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders everything above the body and returns the first body row.
fn render_top(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row += 1;
    current_row = render_tabs(out, current_row, &vm.tabs, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, TOP_CHROME_ROWS + 1);
    current_row
}

/// Renders the status line, bottom border and footer against the last rows.
fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(1);
    let border_row = footer_row.saturating_sub(1).max(1);
    let status_row = border_row.saturating_sub(1).max(1);

    if let Some(message) = &vm.status {
        render_status(out, status_row, message, theme);
    }
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders the browsing layout.
///
/// ```text
/// [blank line]
/// [Title]
/// [Subtitle]
/// [blank line]
/// [Tabs]
/// [Border]
/// [Task rows | empty state]
/// [Status]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let body_row = render_top(out, vm, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, body_row + 1, empty, theme, cols);
    } else {
        render_task_rows(out, body_row, &vm.display_items, theme, cols);
    }

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the create/edit layout: the task list is replaced by the input form.
pub fn render_editor_mode(out: &mut String, vm: &UIViewModel, editor: &EditorInfo, theme: &Theme, cols: usize, rows: usize) {
    let body_row = render_top(out, vm, theme, cols);
    render_editor(out, body_row, editor, theme, cols);
    render_bottom(out, vm, theme, cols, rows);
}
