//! SQLite storage backend.
//!
//! Tasks live in a single `todos` table managed by the embedded
//! [`migrations`](super::migrations). The connection is guarded by a mutex so
//! effects running on different blocking threads never interleave statements.
//!
//! Timestamps are stored as UTC text, which sorts chronologically, and
//! priorities as their `P0`/`P1`/`P2` labels, which sort by urgency.

use crate::domain::{JustdoError, Priority, Result, Task, TaskId};
use crate::storage::backend::TaskStore;
use crate::storage::migrations;
use chrono::Utc;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_COLUMNS: &str = "SELECT id, content, priority, completed, created_at, updated_at FROM todos";

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: JustdoError| FromSqlError::Other(Box::new(e)))
    }
}

/// Task store backed by an SQLite database file.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and migrates it.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the database cannot
    /// be opened, or a migration fails.
    pub fn open(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("open_store", path = %path.display()).entered();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self::init(conn)?;
        tracing::info!(path = %path.display(), "task store opened");
        Ok(store)
    }

    /// Opens a private in-memory database, used by tests and dry runs.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot allocate the database or a migration fails.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(mut conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        migrations::run(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| JustdoError::Storage("connection lock poisoned".to_string()))
    }

    fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            content: row.get(1)?,
            priority: row.get(2)?,
            completed: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn query_tasks(&self, filter_and_order: &str) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} {filter_and_order}"))?;
        let tasks = stmt
            .query_map([], Self::task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    fn count_where(&self, completed: bool) -> Result<u64> {
        let count: i64 = self.conn()?.query_row(
            "SELECT COUNT(*) FROM todos WHERE completed = ?1",
            params![completed],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Runs an `UPDATE` touching a single task, mapping "no row" to `TaskNotFound`.
    fn update_one(&self, id: TaskId, sql: &str, params: &[&dyn ToSql]) -> Result<()> {
        let changed = self.conn()?.execute(sql, params)?;
        if changed == 0 {
            return Err(JustdoError::TaskNotFound(id));
        }
        Ok(())
    }

    fn ensure_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(JustdoError::EmptyContent);
        }
        Ok(())
    }
}

impl TaskStore for SqliteStore {
    fn list_active(&self) -> Result<Vec<Task>> {
        self.query_tasks("WHERE completed = 0 ORDER BY priority ASC, created_at ASC, id ASC")
    }

    fn list_completed(&self) -> Result<Vec<Task>> {
        self.query_tasks("WHERE completed = 1 ORDER BY updated_at DESC, id DESC")
    }

    fn count_active(&self) -> Result<u64> {
        self.count_where(false)
    }

    fn count_completed(&self) -> Result<u64> {
        self.count_where(true)
    }

    fn create(&self, content: &str) -> Result<Task> {
        Self::ensure_content(content)?;
        let now = Utc::now();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO todos (content, priority, completed, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?3)",
            params![content, Priority::default(), now],
        )?;
        let task = Task::new(conn.last_insert_rowid(), content, now);

        tracing::debug!(task_id = task.id, "task created");
        Ok(task)
    }

    fn update_content(&self, id: TaskId, content: &str) -> Result<()> {
        Self::ensure_content(content)?;
        self.update_one(
            id,
            "UPDATE todos SET content = ?1, updated_at = ?2 WHERE id = ?3",
            params![content, Utc::now(), id],
        )
    }

    fn toggle_completed(&self, id: TaskId) -> Result<()> {
        self.update_one(
            id,
            "UPDATE todos SET completed = NOT completed, updated_at = ?1 WHERE id = ?2",
            params![Utc::now(), id],
        )
    }

    fn update_priority(&self, id: TaskId, priority: Priority) -> Result<()> {
        self.update_one(
            id,
            "UPDATE todos SET priority = ?1, updated_at = ?2 WHERE id = ?3",
            params![priority, Utc::now(), id],
        )
    }

    fn delete(&self, id: TaskId) -> Result<()> {
        let removed = self
            .conn()?
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        tracing::debug!(task_id = id, removed = removed, "task deleted");
        Ok(())
    }
}
