//! Journey use-case service.
//!
//! # Responsibility
//! - Guard journey creation (presence, character set, slug collisions).
//! - Run mutation chains as load -> mutate -> save of one whole journey.
//! - Resolve breadcrumb paths against a freshly loaded load-set.
//!
//! # Invariants
//! - Journey ids are allocated against the full load-set at creation time.
//! - Every successful mutation chain ends with exactly one save.
//! - No cross-call cache: every call reloads from the repository.

use crate::breadcrumb::{resolve, Breadcrumb, BreadcrumbPath, PathParseError, ResolveError};
use crate::model::ids::{EntityId, Identified};
use crate::model::journey::{camel_case_name, Journey};
use crate::repo::journey_repo::{JourneyRepoError, JourneyRepository};
use chrono::NaiveDate;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date format accepted from forms, e.g. `13-11-1864`.
pub const TRAVEL_DATE_FORMAT: &str = "%d-%m-%Y";

static JOURNEY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("valid journey name regex"));

/// Errors from journey service operations.
#[derive(Debug)]
pub enum JourneyServiceError {
    /// Journey name is blank after trim.
    EmptyName,
    /// Journey name has characters outside alphanumerics, space, `_`, `-`.
    InvalidNameChars(String),
    /// Another journey maps to the same slug.
    NameInUse(String),
    /// A required text input is blank after trim.
    EmptyField(&'static str),
    /// Date input does not match `TRAVEL_DATE_FORMAT`.
    InvalidDate(String),
    /// Target journey does not exist.
    JourneyNotFound(EntityId),
    /// Breadcrumb path is malformed.
    Path(PathParseError),
    /// Breadcrumb path addresses a missing entity.
    Resolve(ResolveError),
    /// Repository-level failure.
    Repo(JourneyRepoError),
}

impl Display for JourneyServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "journey name must not be blank"),
            Self::InvalidNameChars(name) => write!(
                f,
                "journey name `{name}` may only contain alphanumerics, whitespace, hyphens and underscores"
            ),
            Self::NameInUse(name) => write!(f, "journey name already in use: {name}"),
            Self::EmptyField(field) => write!(f, "{field} must not be blank"),
            Self::InvalidDate(input) => {
                write!(f, "invalid date `{input}`, expected dd-mm-yyyy")
            }
            Self::JourneyNotFound(id) => write!(f, "journey not found: {id}"),
            Self::Path(err) => write!(f, "{err}"),
            Self::Resolve(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JourneyServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Path(err) => Some(err),
            Self::Resolve(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<JourneyRepoError> for JourneyServiceError {
    fn from(value: JourneyRepoError) -> Self {
        match value {
            JourneyRepoError::SlugConflict(slug) => Self::NameInUse(slug),
            other => Self::Repo(other),
        }
    }
}

impl From<PathParseError> for JourneyServiceError {
    fn from(value: PathParseError) -> Self {
        Self::Path(value)
    }
}

impl From<ResolveError> for JourneyServiceError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

/// Ids assigned by [`JourneyService::add_country`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedCountry {
    pub country_id: EntityId,
    pub location_id: EntityId,
}

/// Journey service facade.
pub struct JourneyService<R: JourneyRepository> {
    repo: R,
}

impl<R: JourneyRepository> JourneyService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and saves a journey.
    ///
    /// The name is trimmed first; the stored name is the trimmed one.
    pub fn create_journey(&self, name: &str) -> Result<Journey, JourneyServiceError> {
        let load_set = self.repo.load_journeys()?;
        let name = check_journey_name(name, &load_set)?;

        let journey = Journey::new(name, &load_set);
        self.repo.save_journey(&journey)?;
        info!(
            "event=journey_create module=service status=ok journey_id={}",
            journey.id()
        );
        Ok(journey)
    }

    /// Lists every journey, ordered by id.
    pub fn list_journeys(&self) -> Result<Vec<Journey>, JourneyServiceError> {
        self.repo.load_journeys().map_err(Into::into)
    }

    /// Loads one journey.
    pub fn get_journey(&self, journey_id: EntityId) -> Result<Journey, JourneyServiceError> {
        self.repo
            .get_journey(journey_id)?
            .ok_or(JourneyServiceError::JourneyNotFound(journey_id))
    }

    /// Loads one journey, applies `mutate`, and saves the whole journey.
    ///
    /// Concurrent chains on the same journey are not detected; the later
    /// save wins.
    pub fn update_journey<T>(
        &self,
        journey_id: EntityId,
        mutate: impl FnOnce(&mut Journey) -> T,
    ) -> Result<T, JourneyServiceError> {
        let mut journey = self.get_journey(journey_id)?;
        let output = mutate(&mut journey);
        self.repo.save_journey(&journey)?;
        Ok(output)
    }

    /// Adds a country with its first location and that location's arrival
    /// date.
    pub fn add_country(
        &self,
        journey_id: EntityId,
        country_name: &str,
        location_name: &str,
        arrival_date: NaiveDate,
    ) -> Result<AddedCountry, JourneyServiceError> {
        let country_name = require_text("country", country_name)?;
        let location_name = require_text("city", location_name)?;

        let added = self.update_journey(journey_id, |journey| {
            let country = journey.add_country(country_name);
            let country_id = country.id();
            let location = country.add_location(location_name);
            location.set_arrival_date(arrival_date);
            AddedCountry {
                country_id,
                location_id: location.id(),
            }
        })?;

        info!(
            "event=country_add module=service status=ok journey_id={} country_id={}",
            journey_id, added.country_id
        );
        Ok(added)
    }

    /// Resolves a path to its breadcrumb trail.
    pub fn breadcrumbs(&self, path: &str) -> Result<Vec<Breadcrumb>, JourneyServiceError> {
        let parsed = BreadcrumbPath::parse(path)?;
        let load_set = self.repo.load_journeys()?;
        let trail = resolve(&load_set, &parsed)?;
        Ok(trail.breadcrumbs())
    }
}

/// Checks a candidate journey name against `load_set` and returns it
/// trimmed.
///
/// # Errors
/// - `EmptyName` when blank.
/// - `InvalidNameChars` when outside `[A-Za-z0-9 _-]`.
/// - `NameInUse` when its slug matches an existing journey's slug.
pub fn check_journey_name<'n>(
    name: &'n str,
    load_set: &[Journey],
) -> Result<&'n str, JourneyServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(JourneyServiceError::EmptyName);
    }
    if !JOURNEY_NAME_RE.is_match(trimmed) {
        return Err(JourneyServiceError::InvalidNameChars(trimmed.to_string()));
    }

    let slug = camel_case_name(trimmed);
    if load_set
        .iter()
        .any(|journey| journey.camel_case_name() == slug)
    {
        return Err(JourneyServiceError::NameInUse(trimmed.to_string()));
    }
    Ok(trimmed)
}

/// Parses a `dd-mm-yyyy` form date.
pub fn parse_travel_date(input: &str) -> Result<NaiveDate, JourneyServiceError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, TRAVEL_DATE_FORMAT)
        .map_err(|_| JourneyServiceError::InvalidDate(trimmed.to_string()))
}

fn require_text<'v>(field: &'static str, value: &'v str) -> Result<&'v str, JourneyServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JourneyServiceError::EmptyField(field));
    }
    Ok(trimmed)
}
