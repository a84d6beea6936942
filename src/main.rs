//! Command-line entry point.
//!
//! With no subcommand (or `tui`) the interactive interface runs. `list` and
//! `add` give scriptable access to the same database.
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: move the cursor
//! - `Tab`/`Shift+Tab`: switch between Active and Completed
//! - `space`: toggle completion
//! - `n`: new task
//! - `e`/`c`: edit the selected task
//! - `p`: cycle priority P2 → P1 → P0 → P2 (Active view)
//! - `d`: delete the selected task
//! - `q`/`Ctrl+C`: quit
//!
//! Creating / editing:
//! - `Enter`: save, `Esc`/`Ctrl+C`: cancel, `Backspace`: delete a character

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use justdo::storage::{SqliteStore, TaskStore};
use justdo::{Config, JustdoError, Task, Theme};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "justdo",
    version,
    about = "seriously, just do the thing already..."
)]
struct Cli {
    /// Database file (default: ~/.local/share/justdo/todos.db).
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Configuration file (default: ~/.config/justdo/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Built-in theme name.
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    /// Log filter for the log file; `RUST_LOG` takes precedence.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive interface (default).
    Tui,

    /// Print the tasks of one view.
    List {
        /// Show completed tasks instead of active ones.
        #[arg(long)]
        completed: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Create a task.
    Add {
        /// Task text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("justdo: {e}");
            return ExitCode::FAILURE;
        }
    };

    justdo::observability::init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "justdo starting");

    let db_path = config.database_path();
    let store = match SqliteStore::open(&db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(path = %db_path.display(), error = %e, "failed to open task store");
            eprintln!("justdo: cannot open database {}: {e}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(store, &config).await,
        Command::List { completed, json } => list(store.as_ref(), completed, json),
        Command::Add { content } => add(store.as_ref(), &content.join(" ")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "justdo exited with an error");
            eprintln!("justdo: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> justdo::Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(justdo::infrastructure::default_config_path);
    let mut config = Config::load(&path)?;

    if let Some(db) = &cli.db {
        config.database_path = Some(db.display().to_string());
    }
    if let Some(theme) = &cli.theme {
        config.theme = Some(theme.clone());
        config.theme_file = None;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = Some(level.clone());
    }

    Ok(config)
}

async fn run_tui(store: Arc<SqliteStore>, config: &Config) -> justdo::Result<()> {
    let theme = justdo::load_theme(config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        eprintln!("justdo: {e}; using the default theme");
        Theme::default()
    });

    justdo::tui::run(store, theme, config.drain_timeout()).await
}

fn list(store: &dyn TaskStore, completed: bool, json: bool) -> justdo::Result<()> {
    let tasks = if completed {
        store.list_completed()?
    } else {
        store.list_active()?
    };

    if json {
        let text = serde_json::to_string_pretty(&tasks)
            .map_err(|e| JustdoError::Storage(format!("serialize tasks: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    for task in &tasks {
        println!("{}", list_line(task));
    }
    Ok(())
}

fn list_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!("{:>4}  [{mark}] [{}]  {}", task.id, task.priority, task.content)
}

fn add(store: &dyn TaskStore, content: &str) -> justdo::Result<()> {
    let task = store.create(content)?;
    println!("added task {}: {}", task.id, task.content);
    Ok(())
}
