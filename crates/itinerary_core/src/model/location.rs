//! Location container entity.
//!
//! # Responsibility
//! - Own the accommodations, activities, departure ticket and photos of one
//!   stop within a country.
//!
//! # Invariants
//! - Accommodation ids are unique within this location, as are activity ids.
//! - Child collections keep insertion order.
//! - Mutations never fail; inputs are trusted to be already validated.

use crate::model::accommodation::Accommodation;
use crate::model::activity::Activity;
use crate::model::attributes::{Annotated, Notes};
use crate::model::departure_ticket::DepartureTicket;
use crate::model::ids::{
    allocate_id, ensure_unique_ids, find_by_id, find_by_id_mut, DuplicateSiblingId, EntityId,
    Identified,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stop (city, town, park) within a country.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: EntityId,
    name: String,
    arrival_date: Option<NaiveDate>,
    departure_date: Option<NaiveDate>,
    #[serde(default)]
    departure_ticket: Option<DepartureTicket>,
    #[serde(default)]
    accommodations: Vec<Accommodation>,
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    notes: Notes,
}

impl Location {
    /// Creates an empty location with unset dates.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_date: None,
            departure_date: None,
            departure_ticket: None,
            accommodations: Vec::new(),
            activities: Vec::new(),
            photos: Vec::new(),
            notes: Notes::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_date(&self) -> Option<NaiveDate> {
        self.arrival_date
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn set_arrival_date(&mut self, date: NaiveDate) {
        self.arrival_date = Some(date);
    }

    pub fn set_departure_date(&mut self, date: NaiveDate) {
        self.departure_date = Some(date);
    }

    pub fn departure_ticket(&self) -> Option<&DepartureTicket> {
        self.departure_ticket.as_ref()
    }

    pub fn departure_ticket_mut(&mut self) -> Option<&mut DepartureTicket> {
        self.departure_ticket.as_mut()
    }

    /// Creates a fresh departure ticket, replacing any existing one.
    pub fn set_departure_ticket(&mut self) -> &mut DepartureTicket {
        self.departure_ticket.insert(DepartureTicket::new())
    }

    pub fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    pub fn accommodation(&self, id: EntityId) -> Option<&Accommodation> {
        find_by_id(&self.accommodations, id)
    }

    pub fn accommodation_mut(&mut self, id: EntityId) -> Option<&mut Accommodation> {
        find_by_id_mut(&mut self.accommodations, id)
    }

    /// Appends an accommodation under the next free id and returns it.
    ///
    /// Names are not keys: duplicates are accepted.
    pub fn add_accommodation(&mut self, name: impl Into<String>) -> &mut Accommodation {
        let id = allocate_id(&self.accommodations);
        push_last(&mut self.accommodations, Accommodation::new(id, name))
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity(&self, id: EntityId) -> Option<&Activity> {
        find_by_id(&self.activities, id)
    }

    pub fn activity_mut(&mut self, id: EntityId) -> Option<&mut Activity> {
        find_by_id_mut(&mut self.activities, id)
    }

    /// Appends an activity under the next free id and returns it.
    pub fn add_activity(&mut self, name: impl Into<String>) -> &mut Activity {
        let id = allocate_id(&self.activities);
        push_last(&mut self.activities, Activity::new(id, name))
    }

    /// Photo references in insertion order.
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    /// Appends an opaque photo reference. No dedup, no existence check.
    pub fn add_photo(&mut self, path: impl Into<String>) {
        self.photos.push(path.into());
    }

    pub(crate) fn check_sibling_ids(&self) -> Result<(), DuplicateSiblingId> {
        ensure_unique_ids("accommodation", &self.accommodations)?;
        ensure_unique_ids("activity", &self.activities)
    }
}

impl Identified for Location {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Annotated for Location {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

/// Pushes `item` and returns a handle to it.
pub(crate) fn push_last<T>(items: &mut Vec<T>, item: T) -> &mut T {
    let index = items.len();
    items.push(item);
    &mut items[index]
}
