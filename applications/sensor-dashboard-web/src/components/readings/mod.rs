mod data_table;
mod readings_table;

pub use data_table::DataTable;
