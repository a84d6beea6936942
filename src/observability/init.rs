//! Tracing subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::infrastructure::paths::{get_data_dir, LOG_FILE};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the level filter: `RUST_LOG` first, then `config.log_level`, then
/// [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
    })
}

/// Installs the global tracing subscriber.
///
/// Records are written as JSON lines to `~/.local/share/justdo/justdo.log`,
/// rotated at 10 MB with 3 backups. The terminal belongs to the UI, so nothing
/// is written to stdout or stderr.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created (logging is optional)
/// - Only the first call installs a subscriber; later calls are no-ops
///
/// # Example
///
/// ```rust
/// use justdo::observability::init_tracing;
/// use justdo::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE));

    let json_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(false)
        .with_thread_names(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(json_layer)
        .try_init();
}
