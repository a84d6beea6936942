//! Effects representing persistence operations requested by the reducer.
//!
//! An [`Effect`] is a plain description of work: the reducer returns at most one
//! per event and never performs I/O itself. The
//! [`EffectRunner`](crate::worker::EffectRunner) executes effects off the
//! interactive loop and turns each one into exactly one
//! [`WorkerResponse`](crate::worker::WorkerResponse).
//!
//! # Example
//!
//! ```rust
//! use justdo::app::{Effect, MutationKind, ViewMode};
//!
//! let load = Effect::Load { view: ViewMode::Active, generation: 1 };
//! assert!(load.mutation_kind().is_none());
//!
//! let toggle = Effect::ToggleCompleted { id: 3 };
//! assert_eq!(toggle.mutation_kind(), Some(MutationKind::Toggle));
//! ```

use super::modes::ViewMode;
use crate::domain::{Priority, TaskId};

/// A persistence operation to run outside the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Loads the task list (and both view counts) for `view`.
    Load {
        /// View the load was issued for; results for another view are discarded.
        view: ViewMode,
        /// Monotonic tag; results older than the last applied load are discarded.
        generation: u64,
    },

    /// Creates a task with default priority.
    Create {
        /// Content exactly as typed.
        content: String,
        /// Submission number echoed back in the response.
        submission: u64,
    },

    /// Replaces the content of an existing task.
    UpdateContent {
        /// Target task.
        id: TaskId,
        /// New content exactly as typed.
        content: String,
        /// Submission number echoed back in the response.
        submission: u64,
    },

    /// Flips the completion flag of a task.
    ToggleCompleted {
        /// Target task.
        id: TaskId,
    },

    /// Sets the priority of a task.
    UpdatePriority {
        /// Target task.
        id: TaskId,
        /// Priority to store.
        priority: Priority,
    },

    /// Permanently removes a task.
    Delete {
        /// Target task.
        id: TaskId,
    },
}

/// Which mutation a worker response refers to.
///
/// Carried through the worker for status messages and logs. Whether a response
/// closes the editor is decided by its submission number, not its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    UpdateContent,
    Toggle,
    UpdatePriority,
    Delete,
}

impl MutationKind {
    /// Operation name used in status messages and logs.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Create => "create task",
            Self::UpdateContent => "update task",
            Self::Toggle => "toggle task",
            Self::UpdatePriority => "update priority",
            Self::Delete => "delete task",
        }
    }
}

impl Effect {
    /// Returns the mutation this effect performs, or `None` for loads.
    #[must_use]
    pub const fn mutation_kind(&self) -> Option<MutationKind> {
        match self {
            Self::Load { .. } => None,
            Self::Create { .. } => Some(MutationKind::Create),
            Self::UpdateContent { .. } => Some(MutationKind::UpdateContent),
            Self::ToggleCompleted { .. } => Some(MutationKind::Toggle),
            Self::UpdatePriority { .. } => Some(MutationKind::UpdatePriority),
            Self::Delete { .. } => Some(MutationKind::Delete),
        }
    }

    /// Returns the submission number of a create/update, `None` otherwise.
    #[must_use]
    pub const fn submission(&self) -> Option<u64> {
        match self {
            Self::Create { submission, .. } | Self::UpdateContent { submission, .. } => {
                Some(*submission)
            }
            _ => None,
        }
    }
}
