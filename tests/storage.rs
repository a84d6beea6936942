//! On-disk behaviour of the SQLite store.

use justdo::storage::{migrations, SqliteStore, TaskStore};
use justdo::{JustdoError, Priority};

#[test]
fn tasks_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("todos.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        let task = store.create("water plants").unwrap();
        store.update_priority(task.id, Priority::P0).unwrap();
        let done = store.create("file taxes").unwrap();
        store.toggle_completed(done.id).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let active = store.list_active().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].content, "water plants");
    assert_eq!(active[0].priority, Priority::P0);

    let completed = store.list_completed().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].content, "file taxes");
    assert!(completed[0].completed);
}

#[test]
fn reopening_does_not_rerun_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");

    drop(SqliteStore::open(&path).unwrap());
    drop(SqliteStore::open(&path).unwrap());

    let conn = rusqlite::Connection::open(&path).unwrap();
    assert_eq!(migrations::current_version(&conn).unwrap(), migrations::latest_version());
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.pragma_update(None, "user_version", 99_i64).unwrap();
    }

    assert!(matches!(SqliteStore::open(&path), Err(JustdoError::Storage(_))));
}

#[test]
fn missing_ids_and_blank_content_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&dir.path().join("todos.db")).unwrap();

    assert!(matches!(store.create("  \t"), Err(JustdoError::EmptyContent)));
    assert!(matches!(store.toggle_completed(404), Err(JustdoError::TaskNotFound(404))));
    assert!(matches!(store.update_content(404, "x"), Err(JustdoError::TaskNotFound(404))));
    assert!(store.delete(404).is_ok());
}
