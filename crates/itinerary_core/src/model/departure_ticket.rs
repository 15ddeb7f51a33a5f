//! Departure ticket leaf entity.
//!
//! # Invariants
//! - One ticket per location at most; the ticket carries no id.
//! - `trip_duration` is never negative: a reversed window is an error.

use crate::model::attributes::{Annotated, Costable, Costing, FileAttached, Notes};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a trip duration cannot be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    MissingDepartureTime,
    MissingArrivalTime,
    /// Arrival is earlier than departure.
    ArrivalBeforeDeparture {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },
}

impl Display for DurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDepartureTime => write!(f, "departure time is not set"),
            Self::MissingArrivalTime => write!(f, "arrival time is not set"),
            Self::ArrivalBeforeDeparture { departure, arrival } => write!(
                f,
                "arrival ({arrival}) must not be earlier than departure ({departure})"
            ),
        }
    }
}

impl Error for DurationError {}

/// Ticket used to leave a location for the next one.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartureTicket {
    transport_mode: Option<String>,
    transport_provider: Option<String>,
    ticket_number: Option<String>,
    departure_time: Option<NaiveDateTime>,
    arrival_time: Option<NaiveDateTime>,
    departure_address: Option<String>,
    arrival_address: Option<String>,
    path_to_file: Option<String>,
    costing: Costing,
    notes: Notes,
}

impl DepartureTicket {
    /// Creates a ticket with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transport_mode(&self) -> Option<&str> {
        self.transport_mode.as_deref()
    }

    pub fn transport_provider(&self) -> Option<&str> {
        self.transport_provider.as_deref()
    }

    pub fn ticket_number(&self) -> Option<&str> {
        self.ticket_number.as_deref()
    }

    pub fn departure_time(&self) -> Option<NaiveDateTime> {
        self.departure_time
    }

    pub fn arrival_time(&self) -> Option<NaiveDateTime> {
        self.arrival_time
    }

    pub fn departure_address(&self) -> Option<&str> {
        self.departure_address.as_deref()
    }

    pub fn arrival_address(&self) -> Option<&str> {
        self.arrival_address.as_deref()
    }

    pub fn set_transport_mode(&mut self, mode: impl Into<String>) {
        self.transport_mode = Some(mode.into());
    }

    pub fn set_transport_provider(&mut self, provider: impl Into<String>) {
        self.transport_provider = Some(provider.into());
    }

    pub fn set_ticket_number(&mut self, number: impl Into<String>) {
        self.ticket_number = Some(number.into());
    }

    pub fn set_departure_time(&mut self, time: NaiveDateTime) {
        self.departure_time = Some(time);
    }

    pub fn set_arrival_time(&mut self, time: NaiveDateTime) {
        self.arrival_time = Some(time);
    }

    pub fn set_departure_address(&mut self, address: impl Into<String>) {
        self.departure_address = Some(address.into());
    }

    pub fn set_arrival_address(&mut self, address: impl Into<String>) {
        self.arrival_address = Some(address.into());
    }

    /// Time spent travelling, `arrival_time - departure_time`.
    ///
    /// Both ends are full date-times, so an overnight trip is expressed by
    /// the arrival date and stays positive.
    ///
    /// # Errors
    /// - `MissingDepartureTime` / `MissingArrivalTime` when either end is unset.
    /// - `ArrivalBeforeDeparture` when the window is reversed.
    pub fn trip_duration(&self) -> Result<Duration, DurationError> {
        let departure = self
            .departure_time
            .ok_or(DurationError::MissingDepartureTime)?;
        let arrival = self.arrival_time.ok_or(DurationError::MissingArrivalTime)?;
        if arrival < departure {
            return Err(DurationError::ArrivalBeforeDeparture { departure, arrival });
        }
        Ok(arrival - departure)
    }
}

impl Annotated for DepartureTicket {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

impl Costable for DepartureTicket {
    fn costing(&self) -> &Costing {
        &self.costing
    }

    fn costing_mut(&mut self) -> &mut Costing {
        &mut self.costing
    }
}

impl FileAttached for DepartureTicket {
    fn path_to_file(&self) -> Option<&str> {
        self.path_to_file.as_deref()
    }

    fn set_path_to_file(&mut self, path: impl Into<String>) {
        self.path_to_file = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{DepartureTicket, DurationError};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid test timestamp")
    }

    #[test]
    fn same_day_duration() {
        let mut ticket = DepartureTicket::new();
        ticket.set_departure_time(at(1, 9, 0));
        ticket.set_arrival_time(at(1, 11, 30));

        assert_eq!(
            ticket.trip_duration(),
            Ok(Duration::hours(2) + Duration::minutes(30))
        );
    }

    #[test]
    fn overnight_duration_is_positive() {
        let mut ticket = DepartureTicket::new();
        ticket.set_departure_time(at(1, 22, 15));
        ticket.set_arrival_time(at(2, 6, 45));

        assert_eq!(
            ticket.trip_duration(),
            Ok(Duration::hours(8) + Duration::minutes(30))
        );
    }

    #[test]
    fn reversed_window_is_rejected() {
        let mut ticket = DepartureTicket::new();
        ticket.set_departure_time(at(1, 11, 30));
        ticket.set_arrival_time(at(1, 9, 0));

        assert!(matches!(
            ticket.trip_duration(),
            Err(DurationError::ArrivalBeforeDeparture { .. })
        ));
    }

    #[test]
    fn missing_ends_are_reported() {
        let mut ticket = DepartureTicket::new();
        assert_eq!(
            ticket.trip_duration(),
            Err(DurationError::MissingDepartureTime)
        );

        ticket.set_departure_time(at(1, 9, 0));
        assert_eq!(ticket.trip_duration(), Err(DurationError::MissingArrivalTime));
    }
}
