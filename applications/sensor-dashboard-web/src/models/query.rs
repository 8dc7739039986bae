use chrono::NaiveDate;
use thiserror::Error;

use super::dates::to_wire_date;

/// Missing or incomplete form input, detected before any request is made
///
/// The `Display` text is what the error banner shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide start date, end date, and location.")]
    GraphFieldsMissing,
    #[error("Please provide start date, end date, and at least one location.")]
    CompareFieldsMissing,
}

/// Query parameters as sent on the wire
pub type QueryParams = Vec<(&'static str, String)>;

/// Filter for `GET /data`; both fields optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

impl TableQuery {
    /// Only the filters that are set become parameters
    pub fn params(&self) -> QueryParams {
        let mut params = Vec::new();
        if let Some(date) = self.date {
            params.push(("date", to_wire_date(date)));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        params
    }
}

/// Query for `GET /graph-data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
}

impl GraphQuery {
    pub fn params(&self) -> QueryParams {
        vec![
            ("startDate", to_wire_date(self.start_date)),
            ("endDate", to_wire_date(self.end_date)),
            ("location", self.location.clone()),
        ]
    }
}

/// Query for `GET /compare-graph-data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub locations: Vec<String>,
}

impl CompareQuery {
    /// Locations travel as a single comma-separated parameter
    pub fn params(&self) -> QueryParams {
        vec![
            ("startDate", to_wire_date(self.start_date)),
            ("endDate", to_wire_date(self.end_date)),
            ("locations", self.locations.join(",")),
        ]
    }
}
