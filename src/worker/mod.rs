//! Background execution of persistence effects.
//!
//! This module runs every storage operation off the interactive loop so SQLite
//! I/O never blocks input handling or rendering. Results come back as events on
//! the same channel the loop reads, carrying span context via `tracing`.
//!
//! # Architecture
//!
//! - `messages`: Response protocol sent back to the reducer
//! - `handler`: [`TaskWorker`], which executes one effect against the store
//! - `runner`: [`EffectRunner`], which schedules workers on tokio's blocking pool

pub mod handler;
pub mod messages;
pub mod runner;

pub use handler::TaskWorker;
pub use messages::WorkerResponse;
pub use runner::EffectRunner;
