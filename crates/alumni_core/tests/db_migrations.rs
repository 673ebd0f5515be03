use alumni_core::db::migrations::latest_version;
use alumni_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in [
        "Department",
        "Alumni",
        "Student",
        "Education",
        "Mentorship",
        "Event",
        "Committee",
        "EventParticipationStudent",
        "EventParticipationAlumni",
    ] {
        assert_object_exists(&conn, "table", table);
    }
    assert_object_exists(&conn, "view", "alumni_event_attendance");
}

#[test]
fn opened_connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let err = conn
        .execute(
            "INSERT INTO Education VALUES (1, 999, 'MIT', 'BSc', 'CS', 2010, 2014);",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn opened_connections_carry_stored_routines() {
    let conn = open_db_in_memory().unwrap();
    let days: i64 = conn
        .query_row(
            "SELECT mentorship_duration('2024-01-01', '2024-01-31');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(days, 30);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alumni.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO Department VALUES (1, 'CS', 'Dr. Rao');", [])
        .unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let departments: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM Department;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(departments, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_object_exists(conn: &Connection, kind: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = ?1 AND name = ?2
            );",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{kind} {name} does not exist");
}
