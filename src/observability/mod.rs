//! Structured logging to a rotating JSON file.
//!
//! The interactive interface owns the terminal, so diagnostics go to disk:
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → RotatingFileWriter → justdo.log
//! ```
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` in `config.toml` or `--log-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{env_filter, init_tracing, DEFAULT_LOG_LEVEL};
