//! Embedded schema migrations.
//!
//! Migrations are plain SQL files compiled into the binary and applied in
//! order. The number of applied migrations is tracked in SQLite's
//! `PRAGMA user_version`, so reopening a database only runs what is new.

use crate::domain::{JustdoError, Result};
use rusqlite::Connection;

/// Schema migrations, oldest first. Position `i` upgrades version `i` to `i + 1`.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_create_todos",
        include_str!("../../migrations/0001_create_todos.sql"),
    ),
    (
        "0002_index_completed_updated",
        include_str!("../../migrations/0002_index_completed_updated.sql"),
    ),
];

/// Returns the schema version a fully migrated database has.
#[must_use]
pub const fn latest_version() -> usize {
    MIGRATIONS.len()
}

/// Reads the schema version recorded in the database.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn current_version(conn: &Connection) -> Result<usize> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    usize::try_from(version)
        .map_err(|_| JustdoError::Storage(format!("invalid schema version {version}")))
}

/// Applies every migration newer than the database's recorded version.
///
/// Each migration runs in its own transaction together with the version bump.
///
/// # Errors
///
/// Returns an error if a migration fails, or if the database was written by a
/// newer schema than this build knows.
pub fn run(conn: &mut Connection) -> Result<()> {
    let current = current_version(conn)?;
    if current > latest_version() {
        return Err(JustdoError::Storage(format!(
            "database schema version {current} is newer than supported version {}",
            latest_version()
        )));
    }

    for (index, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current) {
        let _span = tracing::debug_span!("migration", name = name).entered();
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", index as i64 + 1)?;
        tx.commit()?;
        tracing::info!(migration = name, version = index + 1, "applied migration");
    }

    Ok(())
}
