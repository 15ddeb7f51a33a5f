//! Journey repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Load the full load-set of journeys, or one journey by id.
//! - Persist one journey as a whole document (last writer wins).
//!
//! # Invariants
//! - Load order is deterministic: `id ASC`.
//! - Read paths reject documents whose embedded id disagrees with the row.
//! - Saving never merges: the stored document is replaced wholesale.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::ids::{EntityId, Identified};
use crate::model::journey::Journey;
use crate::repo::document::{decode_journey, encode_journey, DocumentError};
use log::{debug, error, info};
use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by journey repository operations.
pub type JourneyRepoResult<T> = Result<T, JourneyRepoError>;

/// Errors from journey repository operations.
#[derive(Debug)]
pub enum JourneyRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Stored document cannot be encoded or decoded.
    Document(DocumentError),
    /// Another journey already uses this slug.
    SlugConflict(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Persisted data cannot be converted to a valid journey.
    InvalidData(String),
}

impl Display for JourneyRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Document(err) => write!(f, "{err}"),
            Self::SlugConflict(slug) => write!(f, "journey slug already in use: {slug}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "journey repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "journey repository requires table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid journey data: {message}"),
        }
    }
}

impl Error for JourneyRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Document(err) => Some(err),
            Self::SlugConflict(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for JourneyRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for JourneyRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<DocumentError> for JourneyRepoError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

/// Repository interface for journey documents.
pub trait JourneyRepository {
    /// Loads every stored journey, ordered by id.
    fn load_journeys(&self) -> JourneyRepoResult<Vec<Journey>>;
    /// Loads one journey by id.
    fn get_journey(&self, id: EntityId) -> JourneyRepoResult<Option<Journey>>;
    /// Inserts or wholly replaces one journey document.
    fn save_journey(&self, journey: &Journey) -> JourneyRepoResult<()>;
}

/// SQLite-backed journey repository.
pub struct SqliteJourneyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJourneyRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> JourneyRepoResult<Self> {
        ensure_journey_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl JourneyRepository for SqliteJourneyRepository<'_> {
    fn load_journeys(&self) -> JourneyRepoResult<Vec<Journey>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, document FROM journeys ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut journeys = Vec::new();

        while let Some(row) = rows.next()? {
            let id: EntityId = row.get(0)?;
            let document: String = row.get(1)?;
            journeys.push(decode_row(id, &document)?);
        }

        debug!(
            "event=journey_load_all module=repo status=ok count={}",
            journeys.len()
        );
        Ok(journeys)
    }

    fn get_journey(&self, id: EntityId) -> JourneyRepoResult<Option<Journey>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM journeys WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )
            .optional()?;

        document
            .map(|document| decode_row(id, &document))
            .transpose()
    }

    fn save_journey(&self, journey: &Journey) -> JourneyRepoResult<()> {
        let document = encode_journey(journey)?;
        let slug = journey.camel_case_name();

        let result = self.conn.execute(
            "INSERT INTO journeys (id, slug, name, document)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                slug = excluded.slug,
                name = excluded.name,
                document = excluded.document,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![journey.id(), slug, journey.name(), document],
        );

        match result {
            Ok(_) => {
                info!(
                    "event=journey_save module=repo status=ok journey_id={} bytes={}",
                    journey.id(),
                    document.len()
                );
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                error!(
                    "event=journey_save module=repo status=error journey_id={} error_code=slug_conflict",
                    journey.id()
                );
                Err(JourneyRepoError::SlugConflict(slug))
            }
            Err(err) => {
                error!(
                    "event=journey_save module=repo status=error journey_id={} error_code=db_write_failed error={}",
                    journey.id(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

fn decode_row(id: EntityId, document: &str) -> JourneyRepoResult<Journey> {
    let journey = decode_journey(document)?;
    if journey.id() != id {
        return Err(JourneyRepoError::InvalidData(format!(
            "row id {id} holds document for journey {}",
            journey.id()
        )));
    }
    Ok(journey)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn ensure_journey_connection_ready(conn: &Connection) -> JourneyRepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(JourneyRepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'journeys'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(JourneyRepoError::MissingRequiredTable("journeys"));
    }

    Ok(())
}
