use itinerary_core::db::migrations::latest_version;
use itinerary_core::db::{open_db, open_db_in_memory, DbError};
use itinerary_core::{JourneyRepoError, SqliteJourneyRepository};
use rusqlite::Connection;

const JOURNEY_COLUMNS: [&str; 6] = ["id", "slug", "name", "document", "created_at", "updated_at"];

#[test]
fn fresh_store_gets_journey_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(journey_columns(&conn), JOURNEY_COLUMNS);
}

#[test]
fn reopening_file_store_keeps_rows_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("itinerary.db");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO journeys (id, slug, name, document) VALUES (1, 'x', 'X', '{}');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(user_version(&second), latest_version());
    let rows: i64 = second
        .query_row("SELECT COUNT(*) FROM journeys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips").join("2024").join("itinerary.db");

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn store_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_and_negative_ids_are_rejected_by_schema() {
    let conn = open_db_in_memory().unwrap();
    let inserted = conn.execute(
        "INSERT INTO journeys (id, slug, name, document) VALUES (0, 'x', 'X', '{}');",
        [],
    );
    assert!(inserted.is_err());
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteJourneyRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        JourneyRepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}

fn user_version(conn: &Connection) -> u32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap()
}

fn journey_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('journeys') ORDER BY cid;")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();
    names
}
