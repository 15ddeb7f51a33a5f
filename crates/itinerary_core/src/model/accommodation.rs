//! Accommodation leaf entity.

use crate::model::attributes::{Annotated, Costable, Costing, Notes};
use crate::model::ids::{EntityId, Identified};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A place to sleep at a location, booked or only shortlisted.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    id: EntityId,
    name: String,
    arrival_date: Option<NaiveDate>,
    departure_date: Option<NaiveDate>,
    /// Time of day; the date comes from `arrival_date`.
    check_in_time: Option<NaiveTime>,
    /// Time of day; the date comes from `departure_date`.
    check_out_time: Option<NaiveTime>,
    address: Option<String>,
    booking_service: Option<String>,
    #[serde(default)]
    costing: Costing,
    #[serde(default)]
    notes: Notes,
}

impl Accommodation {
    /// Creates an accommodation with every optional field unset.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_date: None,
            departure_date: None,
            check_in_time: None,
            check_out_time: None,
            address: None,
            booking_service: None,
            costing: Costing::default(),
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

    pub fn check_in_time(&self) -> Option<NaiveTime> {
        self.check_in_time
    }

    pub fn check_out_time(&self) -> Option<NaiveTime> {
        self.check_out_time
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Service the stay was booked through (e.g. a booking site name).
    pub fn booking_service(&self) -> Option<&str> {
        self.booking_service.as_deref()
    }

    pub fn set_arrival_date(&mut self, date: NaiveDate) {
        self.arrival_date = Some(date);
    }

    pub fn set_departure_date(&mut self, date: NaiveDate) {
        self.departure_date = Some(date);
    }

    pub fn set_check_in_time(&mut self, time: NaiveTime) {
        self.check_in_time = Some(time);
    }

    pub fn set_check_out_time(&mut self, time: NaiveTime) {
        self.check_out_time = Some(time);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    pub fn set_booking_service(&mut self, service: impl Into<String>) {
        self.booking_service = Some(service.into());
    }
}

impl Identified for Accommodation {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Annotated for Accommodation {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

impl Costable for Accommodation {
    fn costing(&self) -> &Costing {
        &self.costing
    }

    fn costing_mut(&mut self) -> &mut Costing {
        &mut self.costing
    }
}
