//! Input and view mode state types for the application.
//!
//! These enums drive the state machine: [`UiMode`] decides how a keystroke is
//! interpreted, [`ViewMode`] decides which subset of tasks is loaded and shown.
//!
//! # State Machine
//!
//! ```text
//!            n                     Enter (stored) / Esc
//! Browsing ─────► Creating ─────────────────────────────► Browsing
//!     │   e / c                    Enter (stored) / Esc
//!     └─────────► Editing  ─────────────────────────────► Browsing
//! ```

/// Current keystroke interpretation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the task list; single keys trigger commands.
    #[default]
    Browsing,

    /// Typing the content of a new task.
    Creating,

    /// Rewriting the content of an existing task.
    Editing,
}

impl UiMode {
    /// Returns `true` for the two text-entry modes.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::Creating | Self::Editing)
    }
}

/// Which task subset is loaded and displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Tasks not yet completed.
    #[default]
    Active,

    /// Completed tasks.
    Completed,
}

impl ViewMode {
    /// Returns the view the Tab key switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}
