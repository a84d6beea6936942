//! Error types for justdo.
//!
//! This module defines the centralized error type [`JustdoError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Errors never cross into the interactive core as structured values: the worker
//! renders them to strings (see [`crate::worker::WorkerResponse`]) before they
//! reach the reducer.

use crate::domain::task::TaskId;
use thiserror::Error;

/// The main error type for justdo operations.
///
/// # Examples
///
/// ```
/// use justdo::JustdoError;
///
/// let err = JustdoError::TaskNotFound(42);
/// assert_eq!(err.to_string(), "task 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum JustdoError {
    /// Storage operation failed for a reason other than a SQLite error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The embedded SQLite database reported an error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A mutation targeted a task id that does not exist.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// Task content was empty after trimming whitespace.
    #[error("task content cannot be empty")]
    EmptyContent,

    /// A stored or configured priority string was not one of `P0`, `P1`, `P2`.
    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An effect aborted before producing a result, e.g. a panic in the store.
    #[error("Worker error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for justdo operations.
pub type Result<T> = std::result::Result<T, JustdoError>;
