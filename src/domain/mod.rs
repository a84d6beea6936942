//! Domain layer for justdo.
//!
//! Core types independent of the terminal, the database engine and the async
//! runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`task`]: Task entity and priority model
//!
//! # Examples
//!
//! ```
//! use justdo::domain::{Priority, Task};
//!
//! let task = Task::new(1, "water the plants", chrono::Utc::now());
//! assert_eq!(task.priority, Priority::P2);
//! ```

pub mod error;
pub mod task;

pub use error::{JustdoError, Result};
pub use task::{Priority, Task, TaskId};
