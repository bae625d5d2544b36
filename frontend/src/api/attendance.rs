use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{ApiError, AttendanceRecord, PunchRequest, PunchResponse, ReverseGeocodeResponse},
};

impl ApiClient {
    /// Today's record, or `None` before the first punch of the day.
    pub async fn get_today_attendance(&self) -> Result<Option<AttendanceRecord>, ApiError> {
        self.get_json("/api/attendance/today").await
    }

    pub async fn punch(&self, location: &str) -> Result<PunchResponse, ApiError> {
        let body = PunchRequest {
            location: location.to_string(),
        };
        self.send_json(Method::POST, "/api/attendance/punch", Some(&body))
            .await
    }

    pub async fn get_attendance_history(
        &self,
        month: u32,
        year: i32,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(&format!(
            "/api/attendance/history?month={}&year={}",
            month, year
        ))
        .await
    }

    pub async fn get_admin_attendance_history(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = match user_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("/api/admin/attendance-history?user_id={}", encode_component(id)),
            None => "/api/admin/attendance-history".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn export_attendance_csv(&self, user_id: Option<&str>) -> Result<String, ApiError> {
        let path = match user_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("/api/admin/export/attendance?user_id={}", encode_component(id)),
            None => "/api/admin/export/attendance".to_string(),
        };
        self.get_text(&path).await
    }

    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, ApiError> {
        let response: ReverseGeocodeResponse = self
            .get_json(&format!(
                "/api/reverse-geocode?lat={}&lon={}",
                latitude, longitude
            ))
            .await?;
        Ok(response.location)
    }
}
