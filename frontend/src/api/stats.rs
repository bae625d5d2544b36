use super::{
    client::ApiClient,
    types::{ApiError, Stats},
};

impl ApiClient {
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.get_json("/api/stats").await
    }

    /// Raw CSV of the caller's tasks.
    pub async fn export_tasks_csv(&self) -> Result<String, ApiError> {
        self.get_text("/api/export/csv").await
    }
}
