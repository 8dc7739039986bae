pub mod error_banner;
pub mod graphs;
pub mod layout;
pub mod readings;

pub use graphs::{CompareGraphPage, GraphPage};
pub use readings::DataTable;
