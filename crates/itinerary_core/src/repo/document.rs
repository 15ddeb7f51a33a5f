//! Journey document codec.
//!
//! # Responsibility
//! - Serialize one journey tree into a self-describing JSON document.
//! - Decode documents back into the exact same tree.
//!
//! # Invariants
//! - `decode_journey(&encode_journey(j)?)? == j` for every journey.
//! - Decoding rejects unknown format versions and duplicate sibling ids
//!   instead of masking them.

use crate::model::ids::DuplicateSiblingId;
use crate::model::journey::Journey;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current document format version.
pub const DOCUMENT_FORMAT_VERSION: u32 = 1;

/// Errors from journey document encoding/decoding.
#[derive(Debug)]
pub enum DocumentError {
    Json(serde_json::Error),
    UnsupportedFormatVersion { found: u32, supported: u32 },
    DuplicateSiblingId(DuplicateSiblingId),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid journey document: {err}"),
            Self::UnsupportedFormatVersion { found, supported } => write!(
                f,
                "journey document format version {found} is not supported (expected {supported})"
            ),
            Self::DuplicateSiblingId(duplicate) => write!(
                f,
                "journey document repeats {} id {}",
                duplicate.scope, duplicate.id
            ),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::UnsupportedFormatVersion { .. } => None,
            Self::DuplicateSiblingId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DuplicateSiblingId> for DocumentError {
    fn from(value: DuplicateSiblingId) -> Self {
        Self::DuplicateSiblingId(value)
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    format_version: u32,
    journey: &'a Journey,
}

#[derive(Deserialize)]
struct DocumentOwned {
    format_version: u32,
    journey: Journey,
}

/// Encodes one journey tree into a JSON document.
pub fn encode_journey(journey: &Journey) -> Result<String, DocumentError> {
    let document = DocumentRef {
        format_version: DOCUMENT_FORMAT_VERSION,
        journey,
    };
    Ok(serde_json::to_string(&document)?)
}

/// Decodes a JSON document produced by [`encode_journey`].
pub fn decode_journey(document: &str) -> Result<Journey, DocumentError> {
    let decoded: DocumentOwned = serde_json::from_str(document)?;
    if decoded.format_version != DOCUMENT_FORMAT_VERSION {
        return Err(DocumentError::UnsupportedFormatVersion {
            found: decoded.format_version,
            supported: DOCUMENT_FORMAT_VERSION,
        });
    }
    decoded.journey.check_sibling_ids()?;
    Ok(decoded.journey)
}
