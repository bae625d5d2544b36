use crate::api::{ApiClient, ApiError, AttendanceRecord, Stats, User};

#[derive(Clone)]
pub struct ReportsRepository {
    api: ApiClient,
}

impl ReportsRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn overview(&self) -> Result<(Stats, Vec<User>), ApiError> {
        futures::try_join!(self.api.get_stats(), self.api.list_team())
    }

    pub async fn attendance_log(&self, user_id: Option<&str>) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.api.get_admin_attendance_history(user_id).await
    }

    pub async fn tasks_csv(&self) -> Result<String, ApiError> {
        self.api.export_tasks_csv().await
    }

    pub async fn attendance_csv(&self, user_id: Option<&str>) -> Result<String, ApiError> {
        self.api.export_attendance_csv(user_id).await
    }
}
