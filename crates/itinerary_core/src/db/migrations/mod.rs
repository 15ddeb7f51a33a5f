//! Ordered schema scripts and the runner that applies them.
//!
//! # Invariants
//! - `SCRIPTS[n]` upgrades the schema from version `n` to `n + 1`.
//! - All pending scripts commit together or not at all.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

const SCRIPTS: &[&str] = &[include_str!("0001_journeys.sql")];

/// Schema version produced by applying every known script.
pub fn latest_version() -> u32 {
    SCRIPTS.len() as u32
}

/// Upgrades `conn` to [`latest_version`].
///
/// # Errors
/// - `SchemaTooNew` when the store was written by a newer build.
/// - `Sqlite` when a script fails; the store keeps its previous version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }
    if found == supported {
        debug!("event=db_migrate module=db status=skip version={found}");
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, script) in (1..).zip(SCRIPTS).skip(found as usize) {
        tx.execute_batch(script)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        found, supported
    );
    Ok(())
}

/// Reads the applied schema version.
pub(crate) fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
