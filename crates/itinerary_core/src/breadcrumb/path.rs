//! Breadcrumb path parsing.
//!
//! Accepted shape:
//! `/journeys/<id>[/countries/<id>[/locations/<id>[/activities/<id>|/accommodations/<id>]]]`
//! optionally followed by one `add_*` marker and an optional numeric
//! pending id, e.g. `/journeys/1/countries/2/add_location` or
//! `/journeys/1/add_country/3`.
//!
//! # Invariants
//! - The marker ends ancestry: the pending id never addresses an existing
//!   entity and is not resolved.
//! - Nothing may follow the pending id.

use crate::model::ids::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

const JOURNEYS: &str = "journeys";
const COUNTRIES: &str = "countries";
const LOCATIONS: &str = "locations";
const ACTIVITIES: &str = "activities";
const ACCOMMODATIONS: &str = "accommodations";
const ADD_MARKER_PREFIX: &str = "add_";

/// Errors from breadcrumb path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Path has no segments or does not start with `journeys`.
    NotAJourneyPath,
    /// A collection keyword is not followed by an id.
    MissingId { collection: &'static str },
    /// An id segment is not a positive integer.
    InvalidId { segment: String },
    /// A segment is not valid at its position.
    UnexpectedSegment { position: usize, segment: String },
}

impl Display for PathParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAJourneyPath => write!(f, "path must start with /{JOURNEYS}/<id>"),
            Self::MissingId { collection } => write!(f, "missing id after `{collection}`"),
            Self::InvalidId { segment } => write!(f, "invalid id segment `{segment}`"),
            Self::UnexpectedSegment { position, segment } => {
                write!(f, "unexpected segment `{segment}` at position {position}")
            }
        }
    }
}

impl Error for PathParseError {}

/// Deepest level addressed below a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafSegment {
    Activity(EntityId),
    Accommodation(EntityId),
}

/// A child being created under the deepest resolved ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChild {
    /// Full marker segment, e.g. `add_location`.
    pub marker: String,
    /// Id the new child is expected to receive, when the path carries it.
    pub next_id: Option<EntityId>,
}

/// Parsed chain of nested ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbPath {
    pub journey_id: EntityId,
    pub country_id: Option<EntityId>,
    pub location_id: Option<EntityId>,
    pub leaf: Option<LeafSegment>,
    pub pending: Option<PendingChild>,
}

impl BreadcrumbPath {
    /// Path addressing one journey.
    pub fn journey(journey_id: EntityId) -> Self {
        Self {
            journey_id,
            country_id: None,
            location_id: None,
            leaf: None,
            pending: None,
        }
    }

    /// Parses a URL-like path. Empty segments (double or trailing slashes)
    /// are ignored.
    pub fn parse(path: &str) -> Result<Self, PathParseError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut cursor = Cursor {
            segments: &segments,
            position: 0,
        };

        if cursor.peek() != Some(JOURNEYS) {
            return Err(PathParseError::NotAJourneyPath);
        }
        cursor.advance();
        let mut parsed = Self::journey(cursor.take_id(JOURNEYS)?);

        if cursor.take_keyword(COUNTRIES) {
            parsed.country_id = Some(cursor.take_id(COUNTRIES)?);

            if cursor.take_keyword(LOCATIONS) {
                parsed.location_id = Some(cursor.take_id(LOCATIONS)?);

                if cursor.take_keyword(ACTIVITIES) {
                    parsed.leaf = Some(LeafSegment::Activity(cursor.take_id(ACTIVITIES)?));
                } else if cursor.take_keyword(ACCOMMODATIONS) {
                    parsed.leaf = Some(LeafSegment::Accommodation(
                        cursor.take_id(ACCOMMODATIONS)?,
                    ));
                }
            }
        }

        if let Some(segment) = cursor.peek() {
            if segment.starts_with(ADD_MARKER_PREFIX) && parsed.leaf.is_none() {
                cursor.advance();
                let next_id = match cursor.peek() {
                    Some(candidate) => {
                        cursor.advance();
                        Some(parse_id(candidate)?)
                    }
                    None => None,
                };
                parsed.pending = Some(PendingChild {
                    marker: segment.to_string(),
                    next_id,
                });
            }
        }

        match cursor.peek() {
            None => Ok(parsed),
            Some(segment) => Err(PathParseError::UnexpectedSegment {
                position: cursor.position,
                segment: segment.to_string(),
            }),
        }
    }
}

struct Cursor<'s> {
    segments: &'s [&'s str],
    position: usize,
}

impl<'s> Cursor<'s> {
    fn peek(&self) -> Option<&'s str> {
        self.segments.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn take_keyword(&mut self, keyword: &str) -> bool {
        if self.peek() == Some(keyword) {
            self.advance();
            return true;
        }
        false
    }

    fn take_id(&mut self, collection: &'static str) -> Result<EntityId, PathParseError> {
        let segment = self
            .peek()
            .ok_or(PathParseError::MissingId { collection })?;
        let id = parse_id(segment)?;
        self.advance();
        Ok(id)
    }
}

/// Accepts canonical ids only: ASCII digits, no sign, no leading zero, so
/// a parsed path prints back to the same text.
fn parse_id(segment: &str) -> Result<EntityId, PathParseError> {
    let canonical = !segment.starts_with('0') && segment.bytes().all(|b| b.is_ascii_digit());
    match segment.parse::<EntityId>() {
        Ok(id) if canonical && id > 0 => Ok(id),
        _ => Err(PathParseError::InvalidId {
            segment: segment.to_string(),
        }),
    }
}
