//! Off-loop effect execution.
//!
//! [`EffectRunner`] moves each effect onto tokio's blocking pool, runs it with
//! a [`TaskWorker`], and sends the response back into the event channel the
//! interactive loop reads. Effects may complete in any order; the reducer
//! sorts that out with view and generation tags.
//!
//! # Example
//!
//! ```no_run
//! use justdo::app::{Effect, Event, ViewMode};
//! use justdo::storage::SqliteStore;
//! use justdo::worker::{EffectRunner, TaskWorker};
//! use std::sync::Arc;
//!
//! # async fn demo() -> justdo::Result<()> {
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Event>();
//! let worker = TaskWorker::new(Arc::new(SqliteStore::open_in_memory()?));
//! let mut runner = EffectRunner::new(worker, tx);
//!
//! runner.dispatch(Effect::Load { view: ViewMode::Active, generation: 1 });
//! let event = rx.recv().await;
//! # Ok(())
//! # }
//! ```

use crate::app::{Effect, Event};
use crate::domain::JustdoError;
use crate::worker::TaskWorker;
use futures_util::future::join_all;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Dispatches effects to the blocking pool and tracks them until they finish.
#[derive(Debug)]
pub struct EffectRunner {
    worker: TaskWorker,
    events: UnboundedSender<Event>,
    in_flight: Vec<JoinHandle<()>>,
}

impl EffectRunner {
    /// Creates a runner that reports results on `events`.
    #[must_use]
    pub const fn new(worker: TaskWorker, events: UnboundedSender<Event>) -> Self {
        Self {
            worker,
            events,
            in_flight: Vec::new(),
        }
    }

    /// Starts running `effect` without waiting for it.
    ///
    /// Exactly one [`Event::Worker`] is sent when the effect finishes, unless
    /// the receiving side has already gone away. A panic while executing the
    /// effect is reported as a failure response.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, effect: Effect) {
        self.in_flight.retain(|handle| !handle.is_finished());

        let worker = self.worker.clone();
        let events = self.events.clone();
        let parent = tracing::Span::current();

        let handle = tokio::task::spawn_blocking(move || {
            let _entered = parent.enter();
            let request = effect.clone();
            let response = panic::catch_unwind(AssertUnwindSafe(|| worker.handle_effect(effect)))
                .unwrap_or_else(|payload| {
                    let error = JustdoError::Worker(panic_message(payload.as_ref()));
                    tracing::error!(effect = ?request, error = %error, "effect panicked");
                    TaskWorker::failure_response(&request, &error)
                });
            if events.send(Event::Worker(response)).is_err() {
                tracing::debug!("event loop gone, dropping worker response");
            }
        });
        self.in_flight.push(handle);
    }

    /// Number of dispatched effects that have not finished yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Waits up to `limit` for every outstanding effect to finish.
    ///
    /// Returns how many effects were still running when the limit expired;
    /// those are abandoned.
    pub async fn drain(&mut self, limit: Duration) -> usize {
        self.in_flight.retain(|handle| !handle.is_finished());
        if self.in_flight.is_empty() {
            return 0;
        }

        tracing::debug!(waiting = self.in_flight.len(), "draining in-flight effects");

        let outcome = tokio::time::timeout(limit, join_all(self.in_flight.iter_mut())).await;
        let abandoned = match outcome {
            Ok(results) => {
                for result in results {
                    if let Err(e) = result {
                        tracing::warn!(error = %e, "effect task failed");
                    }
                }
                0
            }
            Err(_) => self.in_flight(),
        };

        if abandoned > 0 {
            tracing::warn!(abandoned = abandoned, "abandoning effects still running after drain timeout");
        }
        self.in_flight.clear();
        abandoned
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "effect panicked".to_string())
}
