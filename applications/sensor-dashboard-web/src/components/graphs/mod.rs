mod compare_page;
mod date_field;
mod graph_page;
mod line_chart;

pub use compare_page::CompareGraphPage;
pub use graph_page::GraphPage;
