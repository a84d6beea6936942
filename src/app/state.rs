//! Application state container.
//!
//! [`AppState`] is the single snapshot the interactive loop owns. It is only ever
//! replaced by [`handle_event`](crate::app::handle_event), which takes the current
//! snapshot by value and returns the next one, so no other code path can mutate it.
//!
//! # State Components
//!
//! - **Tasks**: last applied load result for the current view (never patched in place)
//! - **Cursor**: index into `tasks`, always kept within bounds
//! - **Modes**: [`UiMode`] for keystroke interpretation, [`ViewMode`] for the subset shown
//! - **Edit buffer**: text typed in Creating/Editing mode
//! - **Load bookkeeping**: generation counters used to discard stale results

use super::effects::Effect;
use super::modes::{UiMode, ViewMode};
use crate::domain::Task;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Returns `true` before the first resize event has been seen.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Per-view task counts shown in the tab bar.
///
/// `None` means the count query failed; presentation shows `?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub active: Option<u64>,
    pub completed: Option<u64>,
}

/// Central application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Which subset of tasks is loaded and displayed.
    pub view_mode: ViewMode,

    /// How keystrokes are interpreted.
    pub ui_mode: UiMode,

    /// Last applied load result for `view_mode`.
    pub tasks: Vec<Task>,

    /// Selected index into `tasks`; `0` when `tasks` is empty.
    pub cursor: usize,

    /// Snapshot of the task being edited. Set only in [`UiMode::Editing`].
    pub editing_target: Option<Task>,

    /// Text typed in Creating/Editing mode; empty while browsing.
    pub edit_buffer: String,

    /// Transient user-facing error text, cleared by the next applied load.
    pub status_message: Option<String>,

    /// Display surface size, consumed by presentation only.
    pub viewport: Viewport,

    /// Counts delivered with the last applied load.
    pub counts: TaskCounts,

    /// Generation of the most recently issued load effect.
    pub load_generation: u64,

    /// Generation of the load whose result is currently displayed.
    pub applied_generation: u64,

    /// Number of the most recently issued create/update submission.
    pub submission_counter: u64,

    /// Submission in flight from the open editor, if any. Only the response
    /// carrying this number may close the editor or release the guard.
    pub pending_submission: Option<u64>,

    /// Set by the quit key; the host loop exits when it sees this.
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the initial state: browsing the Active view with no tasks loaded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use justdo::app::{AppState, UiMode, ViewMode};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.ui_mode, UiMode::Browsing);
    /// assert_eq!(state.view_mode, ViewMode::Active);
    /// assert!(state.tasks.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view_mode: ViewMode::Active,
            ui_mode: UiMode::Browsing,
            tasks: Vec::new(),
            cursor: 0,
            editing_target: None,
            edit_buffer: String::new(),
            status_message: None,
            viewport: Viewport { width: 0, height: 0 },
            counts: TaskCounts { active: None, completed: None },
            load_generation: 0,
            applied_generation: 0,
            submission_counter: 0,
            pending_submission: None,
            should_quit: false,
        }
    }

    /// Returns the task under the cursor, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// Moves the cursor one row up, stopping at the first row.
    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one row down, stopping at the last row.
    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.tasks.len() {
            self.cursor += 1;
        }
    }

    /// Pulls the cursor back inside `tasks` after the list changed length.
    pub fn reclamp_cursor(&mut self) {
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Returns to browsing and forgets any in-progress edit.
    pub fn leave_text_entry(&mut self) {
        self.ui_mode = UiMode::Browsing;
        self.editing_target = None;
        self.edit_buffer.clear();
        self.pending_submission = None;
    }

    /// Allocates the next submission number and marks it pending.
    pub fn issue_submission(&mut self) -> u64 {
        self.submission_counter += 1;
        self.pending_submission = Some(self.submission_counter);
        self.submission_counter
    }

    /// Returns `true` when `submission` is the one the open editor waits on.
    #[must_use]
    pub fn is_pending_submission(&self, submission: Option<u64>) -> bool {
        submission.is_some() && submission == self.pending_submission
    }

    /// Allocates the next load generation and returns the effect reloading the
    /// current view.
    pub fn issue_load(&mut self) -> Effect {
        self.load_generation += 1;
        tracing::trace!(
            view = ?self.view_mode,
            generation = self.load_generation,
            "issuing load"
        );
        Effect::Load {
            view: self.view_mode,
            generation: self.load_generation,
        }
    }

    /// Returns `true` when a load result tagged with `view`/`generation` must
    /// not overwrite what is displayed.
    #[must_use]
    pub fn is_stale_load(&self, view: ViewMode, generation: u64) -> bool {
        view != self.view_mode || generation < self.applied_generation
    }

    /// Checks the cursor bound and mode exclusivity invariants.
    ///
    /// Used by tests and debug assertions.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let cursor_ok = if self.tasks.is_empty() {
            self.cursor == 0
        } else {
            self.cursor < self.tasks.len()
        };
        let target_ok = self.editing_target.is_some() == (self.ui_mode == UiMode::Editing);
        let buffer_ok = self.ui_mode != UiMode::Browsing || self.edit_buffer.is_empty();
        cursor_ok && target_ok && buffer_ok
    }
}
