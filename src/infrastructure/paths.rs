//! Filesystem locations for justdo's database, log and configuration.
//!
//! Paths are resolved against the user's home directory via
//! `directories::BaseDirs`. When no home directory can be determined (some
//! containers, stripped-down service accounts) everything falls back to a
//! `.justdo` directory under the current working directory.

use directories::BaseDirs;
use std::path::PathBuf;

/// File name of the task database inside [`get_data_dir`].
pub const DATABASE_FILE: &str = "todos.db";

/// File name of the JSON log inside [`get_data_dir`].
pub const LOG_FILE: &str = "justdo.log";

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Returns the data directory, `~/.local/share/justdo`.
///
/// The directory is not created here; [`crate::storage::SqliteStore::open`]
/// and the log writer create it on first use.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(".justdo"),
        |home| home.join(".local").join("share").join("justdo"),
    )
}

/// Default database path, `~/.local/share/justdo/todos.db`.
#[must_use]
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}

/// Default configuration file, `~/.config/justdo/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(".justdo").join("config.toml"),
        |home| home.join(".config").join("justdo").join("config.toml"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
///
/// # Examples
///
/// ```
/// use justdo::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert!(!expand_tilde("~/notes.db").starts_with("~"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
