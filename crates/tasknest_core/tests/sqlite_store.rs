use rusqlite::Connection;
use tasknest_core::db::migrations::latest_version;
use tasknest_core::db::{open_db, open_db_in_memory, DbError};
use tasknest_core::{
    AccountStore, KeyValueStore, MemoryStore, SessionManager, SessionPayload, SqliteStore,
    StorageError, TaskListManager,
};

#[test]
fn migrations_set_user_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn set_get_remove_roundtrip_with_upsert() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    assert!(store.get("k").unwrap().is_none());
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn remembered_session_and_tasks_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasknest.sqlite3");
    let payload = SessionPayload {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
    };

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteStore::new(&conn);
        AccountStore::new(&store)
            .create("Ann", "ann@x.com", "pw123456")
            .unwrap();
        SessionManager::new(&store, MemoryStore::new())
            .login(&payload, true)
            .unwrap();
        let mut list = TaskListManager::load(&store, payload.clone()).unwrap();
        list.add_at("persisted", 7).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let sessions = SessionManager::new(&store, MemoryStore::new());
    assert_eq!(sessions.current_user().unwrap(), Some(payload.clone()));
    assert!(AccountStore::new(&store)
        .verify("ann@x.com", "pw123456")
        .is_ok());

    let list = TaskListManager::load(&store, payload).unwrap();
    assert_eq!(list.tasks().len(), 1);
    assert_eq!(list.tasks()[0].text, "persisted");
}

#[test]
fn sqlite_errors_surface_as_storage_errors() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE kv_entries;").unwrap();
    let store = SqliteStore::new(&conn);

    let err = store.set("k", "v").unwrap_err();
    assert!(matches!(err, StorageError::Db(DbError::Sqlite(_))));
}
