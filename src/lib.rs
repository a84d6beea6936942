//! justdo: a keyboard-driven terminal task manager.
//!
//! Tasks live in a local SQLite database and are shown in two views, Active
//! and Completed. Every keypress goes through a pure reducer; persistence runs
//! on tokio's blocking pool and reports back as events.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI + terminal loop (main.rs, tui/)                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Reducer: (AppState, Event) → (AppState, Effect)  │
//! │  - UI / view modes, stale-load discard              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - SQLite      │   │ - Effect exec │
//! │ - Theming     │   │ - Migrations  │   │ - Blocking    │
//! │ - Components  │   │ - TaskStore   │   │   pool        │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Task model (domain/task)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON log lines in a rotating file                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/effect model
//! - [`domain`]: Core domain types (Task, Priority, errors)
//! - [`infrastructure`]: Platform paths
//! - [`storage`]: SQLite persistence behind the [`storage::TaskStore`] trait
//! - [`worker`]: Off-loop effect execution
//! - [`ui`]: Terminal rendering with theme support
//! - [`tui`]: Terminal ownership and the event loop
//! - [`observability`]: Structured logging
//!
//! # Configuration
//!
//! `~/.config/justdo/config.toml` (every key optional):
//!
//! ```toml
//! database_path = "~/notes/todos.db"
//! theme = "catppuccin-mocha"
//! theme_file = "~/.config/justdo/my-theme.toml"
//! log_level = "debug"
//! drain_timeout_ms = 500
//! ```
//!
//! # Example
//!
//! ```rust
//! use justdo::app::{handle_event, Effect, Event, Key};
//! use justdo::storage::SqliteStore;
//! use justdo::worker::TaskWorker;
//! use std::sync::Arc;
//!
//! let worker = TaskWorker::new(Arc::new(SqliteStore::open_in_memory()?));
//! let (mut state, load) = justdo::initialize();
//! state = handle_event(state, Event::Worker(worker.handle_effect(load))).0;
//!
//! let mut effect = None;
//! for key in [Key::Char('n'), Key::Char('h'), Key::Char('i'), Key::Enter] {
//!     let (next, issued) = handle_event(state, Event::Key(key));
//!     state = next;
//!     effect = issued.or(effect);
//! }
//! assert!(matches!(effect, Some(Effect::Create { .. })));
//! # Ok::<(), justdo::JustdoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod tui;
pub mod ui;
pub mod worker;

pub use app::{handle_event, AppState, Effect, Event, Key, UiMode, ViewMode};
pub use domain::{JustdoError, Priority, Result, Task, TaskId};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default time allowed for in-flight effects to finish after quitting.
pub const DEFAULT_DRAIN_TIMEOUT_MS: u64 = 500;

/// User configuration, read from `config.toml`.
///
/// Every field is optional in the file; command-line flags override file
/// values in `main.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database location. `~` is expanded. Default:
    /// `~/.local/share/justdo/todos.db`.
    pub database_path: Option<String>,

    /// Built-in theme name: `magenta` (default) or `catppuccin-mocha`.
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Log filter directive (`trace`, `debug`, `info`, `warn`, `error`, or a
    /// full `EnvFilter` string). `RUST_LOG` wins over this.
    pub log_level: Option<String>,

    /// Milliseconds to wait for in-flight effects on quit.
    pub drain_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            theme: None,
            theme_file: None,
            log_level: None,
            drain_timeout_ms: DEFAULT_DRAIN_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::Config`] for invalid TOML, wrong value types or
    /// unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use justdo::Config;
    ///
    /// let config = Config::from_toml("theme = \"catppuccin-mocha\"").unwrap();
    /// assert_eq!(config.theme.as_deref(), Some("catppuccin-mocha"));
    /// assert_eq!(config.drain_timeout_ms, 500);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| JustdoError::Config(e.to_string()))
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text).map_err(|e| match e {
                JustdoError::Config(msg) => JustdoError::Config(format!("{}: {msg}", path.display())),
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(JustdoError::Config(format!("failed to read {}: {e}", path.display()))),
        }
    }

    /// Resolved database path with `~` expanded.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.database_path.as_deref().map_or_else(
            infrastructure::default_database_path,
            infrastructure::expand_tilde,
        )
    }

    /// Drain timeout as a [`Duration`].
    #[must_use]
    pub const fn drain_timeout(&self) -> Duration {
        Duration::from_millis(self.drain_timeout_ms)
    }
}

/// Creates the initial state and the Active load that populates it.
///
/// The state starts in Browsing on the Active view with an empty list and an
/// unknown (zero) viewport; the caller dispatches the returned effect.
#[must_use]
pub fn initialize() -> (AppState, Effect) {
    tracing::debug!("initializing justdo");
    let mut state = AppState::new();
    let load = state.issue_load();
    (state, load)
}

/// Resolves the configured theme.
///
/// `theme_file` wins over `theme`; with neither set the default theme is used.
///
/// # Errors
///
/// Returns [`JustdoError::Theme`] when the theme file cannot be loaded or the
/// theme name is not a built-in.
pub fn load_theme(config: &Config) -> Result<Theme> {
    if let Some(file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(file));
    }

    match &config.theme {
        Some(name) => Theme::from_name(name).ok_or_else(|| {
            JustdoError::Theme(format!(
                "unknown theme '{name}' (built-in: {})",
                Theme::BUILT_IN.join(", ")
            ))
        }),
        None => Ok(Theme::default()),
    }
}
