//! Connection bootstrap for file-backed and in-memory journey stores.
//!
//! # Invariants
//! - Returned connections are fully migrated.
//! - Writers blocked by another connection wait up to `BUSY_TIMEOUT`;
//!   the later whole-document write wins.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the journey store at `path`, creating the file and its parent
/// directory when missing.
///
/// # Side effects
/// - Emits a `db_open` event with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DbError::StoreDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    timed_open("file", || Ok(Connection::open(path)?))
}

/// Opens a throwaway in-memory journey store.
pub fn open_db_in_memory() -> DbResult<Connection> {
    timed_open("memory", || Ok(Connection::open_in_memory()?))
}

fn timed_open(
    mode: &'static str,
    connect: impl FnOnce() -> DbResult<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    let opened = connect().and_then(|mut conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        apply_migrations(&mut conn)?;
        Ok(conn)
    });
    let duration_ms = started_at.elapsed().as_millis();

    match &opened {
        Ok(_) => info!("event=db_open module=db status=ok mode={mode} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={duration_ms} error={err}"
        ),
    }
    opened
}
