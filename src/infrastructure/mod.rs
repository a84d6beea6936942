//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the database, log file and configuration live on the host.

pub mod paths;

pub use paths::{default_config_path, default_database_path, expand_tilde, get_data_dir};
