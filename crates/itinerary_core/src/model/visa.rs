//! Visa leaf entity.

use crate::model::attributes::{Annotated, Costable, Costing, FileAttached, Notes};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entry permit for one country. At most one per country, carries no id.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visa {
    visa_type: Option<String>,
    number: Option<String>,
    entry_date: Option<NaiveDate>,
    exit_date: Option<NaiveDate>,
    /// Free-form application or embassy information.
    information: Option<String>,
    path_to_file: Option<String>,
    costing: Costing,
    notes: Notes,
}

impl Visa {
    /// Creates a visa with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visa_type(&self) -> Option<&str> {
        self.visa_type.as_deref()
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn entry_date(&self) -> Option<NaiveDate> {
        self.entry_date
    }

    pub fn exit_date(&self) -> Option<NaiveDate> {
        self.exit_date
    }

    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    pub fn set_visa_type(&mut self, visa_type: impl Into<String>) {
        self.visa_type = Some(visa_type.into());
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = Some(number.into());
    }

    pub fn set_entry_date(&mut self, date: NaiveDate) {
        self.entry_date = Some(date);
    }

    pub fn set_exit_date(&mut self, date: NaiveDate) {
        self.exit_date = Some(date);
    }

    pub fn set_information(&mut self, information: impl Into<String>) {
        self.information = Some(information.into());
    }
}

impl Annotated for Visa {
    fn notes(&self) -> &Notes {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Notes {
        &mut self.notes
    }
}

impl Costable for Visa {
    fn costing(&self) -> &Costing {
        &self.costing
    }

    fn costing_mut(&mut self) -> &mut Costing {
        &mut self.costing
    }
}

impl FileAttached for Visa {
    fn path_to_file(&self) -> Option<&str> {
        self.path_to_file.as_deref()
    }

    fn set_path_to_file(&mut self, path: impl Into<String>) {
        self.path_to_file = Some(path.into());
    }
}
