//! Worker response protocol.
//!
//! Every [`Effect`](crate::app::Effect) handed to the worker produces exactly one
//! [`WorkerResponse`], which the runner wraps in
//! [`Event::Worker`](crate::app::Event::Worker) and sends back into the loop.
//! Failures are rendered to `"<operation>: <error>"` strings before they cross
//! into the core, so the reducer never sees storage error types.

use crate::app::{MutationKind, TaskCounts, ViewMode};
use crate::domain::Task;

/// Result of one executed effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A load finished.
    TasksLoaded {
        /// View the load was issued for.
        view: ViewMode,

        /// Generation the load was issued with.
        generation: u64,

        /// Tasks of `view`, in display order.
        tasks: Vec<Task>,

        /// Counts of both views; individual counts may be unknown.
        counts: TaskCounts,
    },

    /// A load failed; the previously displayed tasks stay in place.
    LoadFailed {
        /// View the load was issued for.
        view: ViewMode,

        /// Generation the load was issued with.
        generation: u64,

        /// Human-readable error message.
        message: String,
    },

    /// A mutation was committed.
    Mutated {
        /// Which mutation completed.
        kind: MutationKind,

        /// Submission number for creates/updates, `None` for browsing commands.
        submission: Option<u64>,
    },

    /// A mutation failed and nothing was changed.
    MutationFailed {
        /// Which mutation failed.
        kind: MutationKind,

        /// Submission number for creates/updates, `None` for browsing commands.
        submission: Option<u64>,

        /// Human-readable error message.
        message: String,
    },
}
