//! View model types representing renderable UI state.
//!
//! View models are immutable, display-ready snapshots computed from
//! [`AppState`] by [`compute_viewmodel`]. They hold no business logic: labels are
//! already formatted, long text is already truncated and the task list is
//! already windowed around the cursor.
//!
//! # Example
//!
//! ```rust
//! use justdo::app::{AppState, Viewport};
//! use justdo::ui::viewmodel::compute_viewmodel;
//!
//! let mut state = AppState::new();
//! state.viewport = Viewport { width: 80, height: 24 };
//! let vm = compute_viewmodel(&state);
//! assert!(vm.empty_state.is_some());
//! assert!(vm.tabs[0].is_current);
//! ```

use crate::app::{AppState, UiMode, ViewMode};
use crate::domain::{Priority, Task};
use crate::ui::helpers::truncate_to_width;

/// Rows above the task list: blank, title, subtitle, blank, tabs, border.
pub const TOP_CHROME_ROWS: usize = 6;

/// Rows below the task list: status, border, footer.
pub const BOTTOM_CHROME_ROWS: usize = 3;

/// Columns used by a row before the task content: cursor, badge and spacing.
const ROW_PREFIX_WIDTH: usize = 9;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible window of the task list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Title block.
    pub header: HeaderInfo,

    /// View tabs, Active first.
    pub tabs: Vec<TabInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Shown instead of the list when the current view has no tasks.
    pub empty_state: Option<EmptyState>,

    /// Shown instead of the list while creating or editing.
    pub editor: Option<EditorInfo>,

    /// Transient error line.
    pub status: Option<String>,
}

/// Display information for one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Content, truncated to the available width.
    pub content: String,
    pub priority: Priority,
    pub completed: bool,
    pub is_selected: bool,
}

/// Title block text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// One view tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Label with count, e.g. `Active (3)`; the count is `?` when unknown.
    pub label: String,
    pub is_current: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "↑/k: up • ↓/j: down • q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Text entry box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInfo {
    /// Box title, e.g. "Create New Task".
    pub title: String,
    /// Prompt shown above the input.
    pub prompt: String,
    /// Buffer text, truncated from the left so the end of the input stays visible.
    pub text: String,
}

/// Computes the view model for the current state and viewport.
#[must_use]
pub fn compute_viewmodel(state: &AppState) -> UIViewModel {
    let cols = usize::from(state.viewport.width);
    let rows = usize::from(state.viewport.height);

    let editor = state.ui_mode.is_text_entry().then(|| compute_editor(state, cols));

    let (display_items, selected_index) = if editor.is_some() {
        (Vec::new(), 0)
    } else {
        compute_window(state, available_rows(rows), cols)
    };

    let empty_state = (editor.is_none() && state.tasks.is_empty()).then(|| EmptyState {
        message: match state.view_mode {
            ViewMode::Active => "No active tasks! Press 'n' to create your first one.".to_string(),
            ViewMode::Completed => "Nothing here!".to_string(),
        },
    });

    UIViewModel {
        display_items,
        selected_index,
        header: HeaderInfo {
            title: "justdo".to_string(),
            subtitle: "seriously, just do the thing already...".to_string(),
        },
        tabs: compute_tabs(state),
        footer: compute_footer(state),
        empty_state,
        editor,
        status: state
            .status_message
            .as_ref()
            .map(|message| truncate_to_width(&format!("⚠ {message}"), cols)),
    }
}

/// Number of task rows that fit between the chrome.
#[must_use]
pub const fn available_rows(rows: usize) -> usize {
    let rows = rows.saturating_sub(TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS);
    if rows == 0 {
        1
    } else {
        rows
    }
}

/// Windows the task list around the cursor.
///
/// Returns the visible items and the cursor's index within them.
fn compute_window(state: &AppState, available: usize, cols: usize) -> (Vec<DisplayItem>, usize) {
    let len = state.tasks.len();
    if len == 0 {
        return (Vec::new(), 0);
    }

    let mut visible_start = state.cursor.saturating_sub(available / 2);
    let visible_end = (visible_start + available).min(len);

    if visible_end - visible_start < available && len >= available {
        visible_start = visible_end.saturating_sub(available);
    }

    let content_width = cols.saturating_sub(ROW_PREFIX_WIDTH);
    let items = state.tasks[visible_start..visible_end]
        .iter()
        .enumerate()
        .map(|(offset, task)| display_item(task, visible_start + offset == state.cursor, content_width))
        .collect();

    (items, state.cursor.saturating_sub(visible_start))
}

fn display_item(task: &Task, is_selected: bool, content_width: usize) -> DisplayItem {
    DisplayItem {
        content: truncate_to_width(&task.content, content_width),
        priority: task.priority,
        completed: task.completed,
        is_selected,
    }
}

fn compute_tabs(state: &AppState) -> Vec<TabInfo> {
    let count = |value: Option<u64>| value.map_or_else(|| "?".to_string(), |n| n.to_string());

    [ViewMode::Active, ViewMode::Completed]
        .into_iter()
        .map(|view| {
            let n = match view {
                ViewMode::Active => state.counts.active,
                ViewMode::Completed => state.counts.completed,
            };
            TabInfo {
                label: format!("{} ({})", view.label(), count(n)),
                is_current: view == state.view_mode,
            }
        })
        .collect()
}

fn compute_editor(state: &AppState, cols: usize) -> EditorInfo {
    let (title, prompt) = match state.ui_mode {
        UiMode::Editing => ("Edit Task", "Update content:"),
        _ => ("Create New Task", "Enter your task:"),
    };

    // box borders, padding and the caret take 6 cells
    let inner = cols.saturating_sub(6);
    let text = tail_to_width(&state.edit_buffer, inner);

    EditorInfo {
        title: title.to_string(),
        prompt: prompt.to_string(),
        text,
    }
}

/// Keeps the end of `text` so it fits in `max` cells.
fn tail_to_width(text: &str, max: usize) -> String {
    let reversed: String = text.chars().rev().collect();
    let kept = truncate_to_width(&reversed, max);
    if kept.len() == reversed.len() {
        return text.to_string();
    }
    kept.trim_end_matches('…').chars().rev().collect::<String>()
}

fn compute_footer(state: &AppState) -> FooterInfo {
    let hints: &[&str] = match (state.ui_mode, state.view_mode) {
        (UiMode::Creating | UiMode::Editing, _) => &["↵ enter: save", "esc: cancel"],
        (UiMode::Browsing, ViewMode::Active) => &[
            "↑/k: up",
            "↓/j: down",
            "space: mark complete",
            "n: new",
            "e: edit",
            "d: delete",
            "p: cycle priority",
            "tab: next tab",
            "q: quit",
        ],
        (UiMode::Browsing, ViewMode::Completed) => &[
            "↑/k: up",
            "↓/j: down",
            "space: mark incomplete",
            "d: delete",
            "tab: next tab",
            "q: quit",
        ],
    };

    FooterInfo {
        keybindings: hints.join(" • "),
    }
}
