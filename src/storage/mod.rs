//! Storage layer for persistent task data.
//!
//! This module provides the storage abstraction the worker executes effects
//! against, and its SQLite implementation with embedded schema migrations.
//!
//! # Modules
//!
//! - `backend`: [`TaskStore`] trait abstraction for backend implementations
//! - `sqlite`: SQLite-backed implementation
//! - `migrations`: Versioned schema migrations compiled into the binary

pub mod backend;
pub mod migrations;
pub mod sqlite;

pub use backend::TaskStore;
pub use sqlite::SqliteStore;
