//! Journey root aggregate.
//!
//! # Responsibility
//! - Own the ordered countries of one trip.
//! - Allocate journey ids against an explicit load-set of journeys.
//! - Derive the canonical slug used to detect naming collisions.
//!
//! # Invariants
//! - Journey ids are unique within the load-set they were allocated from.
//! - Country ids are unique within one journey only.
//! - `camel_case_name` is recomputed from `name`, never cached.

use crate::model::attributes::{Annotated, Notes};
use crate::model::country::Country;
use crate::model::ids::{
    allocate_id, ensure_unique_ids, find_by_id, find_by_id_mut, DuplicateSiblingId, EntityId,
    Identified,
};
use crate::model::location::push_last;
use serde::{Deserialize, Serialize};

/// Root trip aggregate.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    id: EntityId,
    name: String,
    #[serde(default)]
    countries: Vec<Country>,
    #[serde(default)]
    notes: Notes,
}

impl Journey {
    /// Creates a journey whose id is the lowest one not taken in `load_set`.
    ///
    /// The caller checks name collisions (see [`camel_case_name`]) before
    /// constructing; this constructor does not.
    pub fn new(name: impl Into<String>, load_set: &[Journey]) -> Self {
        Self {
            id: allocate_id(load_set),
            name: name.into(),
            countries: Vec::new(),
            notes: Notes::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical slug of this journey's name.
    pub fn camel_case_name(&self) -> String {
        camel_case_name(&self.name)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, id: EntityId) -> Option<&Country> {
        find_by_id(&self.countries, id)
    }

    pub fn country_mut(&mut self, id: EntityId) -> Option<&mut Country> {
        find_by_id_mut(&mut self.countries, id)
    }

    /// Appends a country under the next free id and returns it.
    pub fn add_country(&mut self, name: impl Into<String>) -> &mut Country {
        let id = allocate_id(&self.countries);
        push_last(&mut self.countries, Country::new(id, name))
    }

    /// Verifies sibling id uniqueness across the whole tree.
    pub(crate) fn check_sibling_ids(&self) -> Result<(), DuplicateSiblingId> {
        ensure_unique_ids("country", &self.countries)?;
        self.countries
            .iter()
            .try_for_each(Country::check_sibling_ids)
    }
}

impl Identified for Journey {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Annotated for Journey {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

/// Canonical slug: lowercase, every space replaced by an underscore.
///
/// Whitespace runs are not collapsed, so `"FOO  Vacation"` maps to
/// `"foo__vacation"`. Callers trim surrounding whitespace first.
pub fn camel_case_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Finds a journey by id in a load-set.
pub fn find_journey(load_set: &[Journey], id: EntityId) -> Option<&Journey> {
    find_by_id(load_set, id)
}

/// Finds a journey by id in a load-set for mutation.
pub fn find_journey_mut(load_set: &mut [Journey], id: EntityId) -> Option<&mut Journey> {
    find_by_id_mut(load_set, id)
}
