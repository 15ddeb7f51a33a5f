//! Activity leaf entity.

use crate::model::attributes::{Annotated, Costable, Costing, Notes};
use crate::model::ids::{EntityId, Identified};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Something planned at a location: a hike, a tour, a museum visit.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: EntityId,
    name: String,
    starting_time: Option<NaiveDateTime>,
    ending_time: Option<NaiveDateTime>,
    starting_address: Option<String>,
    ending_address: Option<String>,
    #[serde(default)]
    costing: Costing,
    #[serde(default)]
    notes: Notes,
    #[serde(default)]
    to_bring: Vec<String>,
}

impl Activity {
    /// Creates an activity with every optional field unset.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            starting_time: None,
            ending_time: None,
            starting_address: None,
            ending_address: None,
            costing: Costing::default(),
            notes: Notes::default(),
            to_bring: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting_time(&self) -> Option<NaiveDateTime> {
        self.starting_time
    }

    pub fn ending_time(&self) -> Option<NaiveDateTime> {
        self.ending_time
    }

    pub fn starting_address(&self) -> Option<&str> {
        self.starting_address.as_deref()
    }

    pub fn ending_address(&self) -> Option<&str> {
        self.ending_address.as_deref()
    }

    /// Items to bring, in the order they were added.
    pub fn to_bring(&self) -> &[String] {
        &self.to_bring
    }

    pub fn set_starting_time(&mut self, time: NaiveDateTime) {
        self.starting_time = Some(time);
    }

    pub fn set_ending_time(&mut self, time: NaiveDateTime) {
        self.ending_time = Some(time);
    }

    pub fn set_starting_address(&mut self, address: impl Into<String>) {
        self.starting_address = Some(address.into());
    }

    pub fn set_ending_address(&mut self, address: impl Into<String>) {
        self.ending_address = Some(address.into());
    }

    /// Appends one item. Duplicates are kept.
    pub fn add_item_to_bring(&mut self, item: impl Into<String>) {
        self.to_bring.push(item.into());
    }
}

impl Identified for Activity {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Annotated for Activity {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

impl Costable for Activity {
    fn costing(&self) -> &Costing {
        &self.costing
    }

    fn costing_mut(&mut self) -> &mut Costing {
        &mut self.costing
    }
}
