use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{ApiError, CalendarEvent, EventDraft},
};

impl ApiClient {
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>, ApiError> {
        self.get_json("/api/calendar/events").await
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, ApiError> {
        self.send_json(Method::POST, "/api/calendar/events", Some(draft))
            .await
    }

    pub async fn update_event(&self, event_id: &str, draft: &EventDraft) -> Result<(), ApiError> {
        self.send_empty(
            Method::PATCH,
            &format!("/api/calendar/events/{}", encode_component(event_id)),
            Some(draft),
        )
        .await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<(), ApiError> {
        self.send_empty::<()>(
            Method::DELETE,
            &format!("/api/calendar/events/{}", encode_component(event_id)),
            None,
        )
        .await
    }
}
