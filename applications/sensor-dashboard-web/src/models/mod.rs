pub mod chart;
pub mod dates;
pub mod form;
pub mod location_set;
pub mod query;
pub mod reading;

pub use chart::{ChartData, ChartSeries};
pub use form::{CompareForm, GraphForm, TableFilter};
pub use query::{CompareQuery, GraphQuery, TableQuery, ValidationError};
pub use reading::{CompareResponse, GraphPoint, Reading, ReadingRow};
