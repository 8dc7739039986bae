//! Form field state for each page, and the validation that turns it into a query

use super::dates::parse_input_date;
use super::location_set::LocationSet;
use super::query::{CompareQuery, GraphQuery, TableQuery, ValidationError};

/// Filter fields on the readings table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub date: String,
    pub location: String,
}

impl TableFilter {
    /// Blank fields are left out of the query
    pub fn query(&self) -> TableQuery {
        let location = self.location.trim();
        TableQuery {
            date: parse_input_date(&self.date),
            location: (!location.is_empty()).then(|| location.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.location.clear();
    }
}

/// Fields on the single-location graph page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphForm {
    pub start_date: String,
    pub end_date: String,
    pub location: String,
}

impl GraphForm {
    pub fn query(&self) -> Result<GraphQuery, ValidationError> {
        let location = self.location.trim();
        match (
            parse_input_date(&self.start_date),
            parse_input_date(&self.end_date),
        ) {
            (Some(start_date), Some(end_date)) if !location.is_empty() => Ok(GraphQuery {
                start_date,
                end_date,
                location: location.to_string(),
            }),
            _ => Err(ValidationError::GraphFieldsMissing),
        }
    }
}

/// Fields on the comparison graph page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareForm {
    pub start_date: String,
    pub end_date: String,
    /// Text currently typed into the location input
    pub location_input: String,
    pub locations: LocationSet,
}

impl CompareForm {
    /// Move the typed location into the set; the input is cleared only on success
    pub fn add_location(&mut self) -> bool {
        let added = self.locations.add(&self.location_input);
        if added {
            self.location_input.clear();
        }
        added
    }

    pub fn remove_location(&mut self, location: &str) -> bool {
        self.locations.remove(location)
    }

    pub fn query(&self) -> Result<CompareQuery, ValidationError> {
        match (
            parse_input_date(&self.start_date),
            parse_input_date(&self.end_date),
        ) {
            (Some(start_date), Some(end_date)) if !self.locations.is_empty() => {
                Ok(CompareQuery {
                    start_date,
                    end_date,
                    locations: self.locations.to_vec(),
                })
            }
            _ => Err(ValidationError::CompareFieldsMissing),
        }
    }
}
