//! Core domain logic for the travel itinerary planner.
//! This crate owns the journey tree, its id allocation, breadcrumb
//! resolution and the journey document store.

pub mod breadcrumb;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use breadcrumb::{
    resolve, Breadcrumb, BreadcrumbPath, LeafRef, LeafSegment, PathParseError, PendingChild,
    ResolveError, Trail,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::accommodation::Accommodation;
pub use model::activity::Activity;
pub use model::attributes::{render_markdown, Annotated, Costable, Costing, FileAttached, Notes};
pub use model::country::{Country, StayError, VisaStatus};
pub use model::departure_ticket::{DepartureTicket, DurationError};
pub use model::ids::{next_free_id, DuplicateSiblingId, EntityId, Identified};
pub use model::journey::{camel_case_name, find_journey, find_journey_mut, Journey};
pub use model::location::Location;
pub use model::visa::Visa;
pub use repo::document::{decode_journey, encode_journey, DocumentError};
pub use repo::journey_repo::{
    JourneyRepoError, JourneyRepoResult, JourneyRepository, SqliteJourneyRepository,
};
pub use service::journey_service::{
    check_journey_name, parse_travel_date, AddedCountry, JourneyService, JourneyServiceError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
