//! Ancestry resolution over a load-set of journeys.
//!
//! # Responsibility
//! - Walk a parsed path level by level using parent-scoped lookups.
//! - Pair each resolved entity with the path prefix that addresses it.
//!
//! # Invariants
//! - Resolution stops at the deepest level present in the path.
//! - A miss is reported at the exact level where it happened.

use crate::breadcrumb::path::{BreadcrumbPath, LeafSegment, PendingChild};
use crate::model::accommodation::Accommodation;
use crate::model::activity::Activity;
use crate::model::country::Country;
use crate::model::ids::{EntityId, Identified};
use crate::model::journey::{find_journey, Journey};
use crate::model::location::Location;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Level at which a lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    JourneyNotFound {
        journey_id: EntityId,
    },
    CountryNotFound {
        journey_id: EntityId,
        country_id: EntityId,
    },
    LocationNotFound {
        country_id: EntityId,
        location_id: EntityId,
    },
    ActivityNotFound {
        location_id: EntityId,
        activity_id: EntityId,
    },
    AccommodationNotFound {
        location_id: EntityId,
        accommodation_id: EntityId,
    },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JourneyNotFound { journey_id } => write!(f, "journey not found: {journey_id}"),
            Self::CountryNotFound {
                journey_id,
                country_id,
            } => write!(f, "country {country_id} not found in journey {journey_id}"),
            Self::LocationNotFound {
                country_id,
                location_id,
            } => write!(f, "location {location_id} not found in country {country_id}"),
            Self::ActivityNotFound {
                location_id,
                activity_id,
            } => write!(f, "activity {activity_id} not found in location {location_id}"),
            Self::AccommodationNotFound {
                location_id,
                accommodation_id,
            } => write!(
                f,
                "accommodation {accommodation_id} not found in location {location_id}"
            ),
        }
    }
}

impl Error for ResolveError {}

/// Resolved leaf below a location.
#[derive(Debug, Clone, Copy)]
pub enum LeafRef<'a> {
    Activity(&'a Activity),
    Accommodation(&'a Accommodation),
}

/// One crumb: display name plus the path that addresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

/// Chain of live references addressed by a path.
#[derive(Debug, Clone)]
pub struct Trail<'a> {
    pub journey: &'a Journey,
    pub country: Option<&'a Country>,
    pub location: Option<&'a Location>,
    pub leaf: Option<LeafRef<'a>>,
    /// Child being created under the deepest ancestor, if any.
    pub pending: Option<&'a PendingChild>,
}

impl Trail<'_> {
    /// Breadcrumbs from the journey down to the deepest resolved entity.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut href = format!("/journeys/{}", self.journey.id());
        let mut crumbs = vec![Breadcrumb {
            label: self.journey.name().to_string(),
            href: href.clone(),
        }];

        if let Some(country) = self.country {
            href.push_str(&format!("/countries/{}", country.id()));
            crumbs.push(Breadcrumb {
                label: country.name().to_string(),
                href: href.clone(),
            });
        }

        if let Some(location) = self.location {
            href.push_str(&format!("/locations/{}", location.id()));
            crumbs.push(Breadcrumb {
                label: location.name().to_string(),
                href: href.clone(),
            });
        }

        match self.leaf {
            Some(LeafRef::Activity(activity)) => {
                href.push_str(&format!("/activities/{}", activity.id()));
                crumbs.push(Breadcrumb {
                    label: activity.name().to_string(),
                    href,
                });
            }
            Some(LeafRef::Accommodation(accommodation)) => {
                href.push_str(&format!("/accommodations/{}", accommodation.id()));
                crumbs.push(Breadcrumb {
                    label: accommodation.name().to_string(),
                    href,
                });
            }
            None => {}
        }

        crumbs
    }
}

/// Resolves `path` against `load_set`.
///
/// # Errors
/// Returns the `*NotFound` variant of the first level with no match.
pub fn resolve<'a>(
    load_set: &'a [Journey],
    path: &'a BreadcrumbPath,
) -> Result<Trail<'a>, ResolveError> {
    let journey = find_journey(load_set, path.journey_id).ok_or(ResolveError::JourneyNotFound {
        journey_id: path.journey_id,
    })?;
    let mut trail = Trail {
        journey,
        country: None,
        location: None,
        leaf: None,
        pending: path.pending.as_ref(),
    };

    let Some(country_id) = path.country_id else {
        return Ok(trail);
    };
    let country = journey
        .country(country_id)
        .ok_or(ResolveError::CountryNotFound {
            journey_id: journey.id(),
            country_id,
        })?;
    trail.country = Some(country);

    let Some(location_id) = path.location_id else {
        return Ok(trail);
    };
    let location = country
        .location(location_id)
        .ok_or(ResolveError::LocationNotFound {
            country_id,
            location_id,
        })?;
    trail.location = Some(location);

    trail.leaf = match path.leaf {
        None => None,
        Some(LeafSegment::Activity(activity_id)) => Some(LeafRef::Activity(
            location
                .activity(activity_id)
                .ok_or(ResolveError::ActivityNotFound {
                    location_id,
                    activity_id,
                })?,
        )),
        Some(LeafSegment::Accommodation(accommodation_id)) => Some(LeafRef::Accommodation(
            location.accommodation(accommodation_id).ok_or(
                ResolveError::AccommodationNotFound {
                    location_id,
                    accommodation_id,
                },
            )?,
        )),
    };

    Ok(trail)
}
