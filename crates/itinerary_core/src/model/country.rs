//! Country container entity.
//!
//! # Responsibility
//! - Own the ordered locations visited in one country and its visa slot.
//! - Derive the length of stay from the first and last location.
//!
//! # Invariants
//! - Location ids are unique within this country.
//! - Location order is insertion order, which is taken as travel order.

use crate::model::attributes::{Annotated, Notes};
use crate::model::ids::{
    allocate_id, ensure_unique_ids, find_by_id, find_by_id_mut, DuplicateSiblingId, EntityId,
    Identified,
};
use crate::model::location::{push_last, Location};
use crate::model::visa::Visa;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Visa slot of a country.
///
/// `Unset` means the question was never answered, which is distinct from
/// an explicit `NotNeeded`.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "visa", rename_all = "snake_case")]
pub enum VisaStatus {
    #[default]
    Unset,
    NotNeeded,
    Required(Visa),
}

/// Why a length of stay cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayError {
    /// Country has no locations yet.
    NoLocations,
    /// First location has no arrival date.
    MissingArrivalDate { location_id: EntityId },
    /// Last location has no departure date.
    MissingDepartureDate { location_id: EntityId },
}

impl Display for StayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLocations => write!(f, "country has no locations"),
            Self::MissingArrivalDate { location_id } => {
                write!(f, "location {location_id} has no arrival date")
            }
            Self::MissingDepartureDate { location_id } => {
                write!(f, "location {location_id} has no departure date")
            }
        }
    }
}

impl Error for StayError {}

/// A country visited during a journey.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    id: EntityId,
    name: String,
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    visa: VisaStatus,
    #[serde(default)]
    notes: Notes,
}

impl Country {
    /// Creates a country with no locations and an unset visa slot.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            locations: Vec::new(),
            visa: VisaStatus::Unset,
            notes: Notes::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: EntityId) -> Option<&Location> {
        find_by_id(&self.locations, id)
    }

    pub fn location_mut(&mut self, id: EntityId) -> Option<&mut Location> {
        find_by_id_mut(&mut self.locations, id)
    }

    /// Appends a location under the next free id and returns it.
    pub fn add_location(&mut self, name: impl Into<String>) -> &mut Location {
        let id = allocate_id(&self.locations);
        push_last(&mut self.locations, Location::new(id, name))
    }

    pub fn visa(&self) -> &VisaStatus {
        &self.visa
    }

    /// Returns the visa when one is required.
    pub fn visa_mut(&mut self) -> Option<&mut Visa> {
        match &mut self.visa {
            VisaStatus::Required(visa) => Some(visa),
            VisaStatus::Unset | VisaStatus::NotNeeded => None,
        }
    }

    /// Answers the visa question.
    ///
    /// `true` attaches a fresh visa (replacing any previous one), `false`
    /// records that none is needed.
    pub fn set_visa(&mut self, needed: bool) {
        self.visa = if needed {
            VisaStatus::Required(Visa::new())
        } else {
            VisaStatus::NotNeeded
        };
    }

    /// Whole days between the first location's arrival and the last
    /// location's departure.
    ///
    /// First and last are taken by list position, not by date: locations
    /// added out of chronological order yield whatever difference that
    /// order produces, including a negative one.
    ///
    /// # Errors
    /// - `NoLocations` when the country is empty.
    /// - `MissingArrivalDate` / `MissingDepartureDate` when a required date
    ///   is unset.
    pub fn length_of_stay(&self) -> Result<i64, StayError> {
        let (first, last) = match (self.locations.first(), self.locations.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(StayError::NoLocations),
        };
        let arrival = first.arrival_date().ok_or(StayError::MissingArrivalDate {
            location_id: first.id(),
        })?;
        let departure = last.departure_date().ok_or(StayError::MissingDepartureDate {
            location_id: last.id(),
        })?;
        Ok((departure - arrival).num_days())
    }

    pub(crate) fn check_sibling_ids(&self) -> Result<(), DuplicateSiblingId> {
        ensure_unique_ids("location", &self.locations)?;
        self.locations
            .iter()
            .try_for_each(Location::check_sibling_ids)
    }
}

impl Identified for Country {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Annotated for Country {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}
