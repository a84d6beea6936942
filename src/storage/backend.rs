//! Storage backend abstraction.
//!
//! This module defines the [`TaskStore`] trait the worker runs effects against.
//! The trait is minimal: each method maps directly to one persistence operation
//! the application needs, not a generic ORM.
//!
//! Methods take `&self` so one store can be shared as `Arc<dyn TaskStore>`
//! between concurrently running effects; implementations serialise access
//! internally.

use crate::domain::{Priority, Result, Task, TaskId};

/// Persistence port for tasks.
///
/// # Implementations
///
/// - [`SqliteStore`](crate::storage::SqliteStore): embedded SQLite database (default)
///
/// # Examples
///
/// ```
/// use justdo::storage::{SqliteStore, TaskStore};
///
/// let store = SqliteStore::open_in_memory()?;
/// let task = store.create("water the plants")?;
/// assert_eq!(store.list_active()?, vec![task]);
/// # Ok::<(), justdo::JustdoError>(())
/// ```
pub trait TaskStore: Send + Sync {
    /// Returns tasks not yet completed, most urgent first, then oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn list_active(&self) -> Result<Vec<Task>>;

    /// Returns completed tasks, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn list_completed(&self) -> Result<Vec<Task>>;

    /// Counts tasks not yet completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn count_active(&self) -> Result<u64>;

    /// Counts completed tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn count_completed(&self) -> Result<u64>;

    /// Stores a new task with priority `P2`, not completed.
    ///
    /// `content` is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::EmptyContent`](crate::JustdoError::EmptyContent)
    /// if `content` is blank, or an error if the write fails.
    fn create(&self, content: &str) -> Result<Task>;

    /// Replaces the content of a task and refreshes its update time.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::EmptyContent`](crate::JustdoError::EmptyContent)
    /// for blank content, [`JustdoError::TaskNotFound`](crate::JustdoError::TaskNotFound)
    /// if no task has `id`, or an error if the write fails.
    fn update_content(&self, id: TaskId, content: &str) -> Result<()>;

    /// Flips the completion flag of a task and refreshes its update time.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::TaskNotFound`](crate::JustdoError::TaskNotFound)
    /// if no task has `id`, or an error if the write fails.
    fn toggle_completed(&self, id: TaskId) -> Result<()>;

    /// Sets the priority of a task and refreshes its update time.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::TaskNotFound`](crate::JustdoError::TaskNotFound)
    /// if no task has `id`, or an error if the write fails.
    fn update_priority(&self, id: TaskId, priority: Priority) -> Result<()>;

    /// Permanently removes a task. Removing a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete(&self, id: TaskId) -> Result<()>;
}
