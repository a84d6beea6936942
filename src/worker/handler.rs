//! Effect execution against the task store.
//!
//! [`TaskWorker`] turns one [`Effect`] into one [`WorkerResponse`]. It is
//! synchronous: the [`EffectRunner`](super::EffectRunner) calls it on tokio's
//! blocking pool so SQLite I/O never stalls the interactive loop.

use crate::app::{Effect, MutationKind, TaskCounts, ViewMode};
use crate::domain::{JustdoError, Result};
use crate::storage::TaskStore;
use crate::worker::WorkerResponse;
use std::sync::Arc;

/// Executes effects against a shared store.
#[derive(Clone)]
pub struct TaskWorker {
    store: Arc<dyn TaskStore>,
}

impl std::fmt::Debug for TaskWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskWorker").finish_non_exhaustive()
    }
}

impl TaskWorker {
    /// Creates a worker over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Returns the store this worker runs against.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// Helper for handling mutation results with consistent logging.
    ///
    /// Failures are rendered as `"<operation>: <error>"` so no storage error
    /// type crosses into the application core.
    fn handle_db_result(kind: MutationKind, submission: Option<u64>, result: Result<()>) -> WorkerResponse {
        let operation = kind.describe();
        match result {
            Ok(()) => {
                tracing::debug!(operation = operation, "storage operation successful");
                WorkerResponse::Mutated { kind, submission }
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::MutationFailed {
                    kind,
                    submission,
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Builds the failure response for `effect` when it could not run at all.
    ///
    /// Keeps the one-response-per-effect contract when execution aborts, e.g.
    /// a panic inside the store.
    #[must_use]
    pub fn failure_response(effect: &Effect, error: &JustdoError) -> WorkerResponse {
        let kind = match effect {
            Effect::Load { view, generation } => {
                return WorkerResponse::LoadFailed {
                    view: *view,
                    generation: *generation,
                    message: format!("load tasks: {error}"),
                }
            }
            Effect::Create { .. } => MutationKind::Create,
            Effect::UpdateContent { .. } => MutationKind::UpdateContent,
            Effect::ToggleCompleted { .. } => MutationKind::Toggle,
            Effect::UpdatePriority { .. } => MutationKind::UpdatePriority,
            Effect::Delete { .. } => MutationKind::Delete,
        };
        WorkerResponse::MutationFailed {
            kind,
            submission: effect.submission(),
            message: format!("{}: {error}", kind.describe()),
        }
    }

    /// Reads one count, degrading to unknown on failure.
    fn count(operation: &str, result: Result<u64>) -> Option<u64> {
        result
            .map_err(|e| tracing::warn!(operation = operation, error = %e, "count failed"))
            .ok()
    }

    /// Handles `Effect::Load`.
    ///
    /// Lists the tasks of `view` and counts both views. A failed count does not
    /// fail the load.
    fn handle_load(&self, view: ViewMode, generation: u64) -> WorkerResponse {
        let listed = match view {
            ViewMode::Active => self.store.list_active(),
            ViewMode::Completed => self.store.list_completed(),
        };

        match listed {
            Ok(tasks) => {
                let counts = TaskCounts {
                    active: Self::count("count active", self.store.count_active()),
                    completed: Self::count("count completed", self.store.count_completed()),
                };
                tracing::debug!(
                    view = ?view,
                    generation = generation,
                    task_count = tasks.len(),
                    "tasks loaded from storage"
                );
                WorkerResponse::TasksLoaded { view, generation, tasks, counts }
            }
            Err(e) => {
                tracing::warn!(view = ?view, error = %e, "load failed");
                WorkerResponse::LoadFailed {
                    view,
                    generation,
                    message: format!("load tasks: {e}"),
                }
            }
        }
    }

    /// Executes an effect and returns the response for the reducer.
    ///
    /// This is the main entry point, dispatching to the store method matching
    /// the effect variant inside a tracing span for the operation.
    #[must_use]
    pub fn handle_effect(&self, effect: Effect) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_effect", effect = ?effect);
        let _guard = span.entered();

        let submission = effect.submission();
        match effect {
            Effect::Load { view, generation } => self.handle_load(view, generation),
            Effect::Create { content, .. } => Self::handle_db_result(
                MutationKind::Create,
                submission,
                self.store.create(&content).map(|task| {
                    tracing::debug!(task_id = task.id, "created");
                }),
            ),
            Effect::UpdateContent { id, content, .. } => Self::handle_db_result(
                MutationKind::UpdateContent,
                submission,
                self.store.update_content(id, &content),
            ),
            Effect::ToggleCompleted { id } => {
                Self::handle_db_result(MutationKind::Toggle, None, self.store.toggle_completed(id))
            }
            Effect::UpdatePriority { id, priority } => Self::handle_db_result(
                MutationKind::UpdatePriority,
                None,
                self.store.update_priority(id, priority),
            ),
            Effect::Delete { id } => {
                Self::handle_db_result(MutationKind::Delete, None, self.store.delete(id))
            }
        }
    }
}
