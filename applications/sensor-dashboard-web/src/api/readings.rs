use super::client::{ApiClient, ApiError};
use crate::models::{CompareQuery, CompareResponse, GraphPoint, GraphQuery, Reading, TableQuery};

impl ApiClient {
    /// Get readings, optionally filtered by date and location
    pub async fn get_readings(&self, query: &TableQuery) -> Result<Vec<Reading>, ApiError> {
        self.get("/data", &query.params()).await
    }

    /// Get daily pH averages for one location
    pub async fn get_graph_data(&self, query: &GraphQuery) -> Result<Vec<GraphPoint>, ApiError> {
        self.get("/graph-data", &query.params()).await
    }

    /// Get daily pH averages for several locations at once
    pub async fn get_compare_graph_data(
        &self,
        query: &CompareQuery,
    ) -> Result<CompareResponse, ApiError> {
        self.get("/compare-graph-data", &query.params()).await
    }
}
