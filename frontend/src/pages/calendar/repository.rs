use crate::api::{ApiClient, ApiError, CalendarEvent, EventDraft};

#[derive(Clone)]
pub struct CalendarRepository {
    api: ApiClient,
}

impl CalendarRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn events(&self) -> Result<Vec<CalendarEvent>, ApiError> {
        self.api.list_events().await
    }

    pub async fn create(&self, draft: &EventDraft) -> Result<CalendarEvent, ApiError> {
        self.api.create_event(draft).await
    }

    pub async fn update(&self, event_id: &str, draft: &EventDraft) -> Result<(), ApiError> {
        self.api.update_event(event_id, draft).await
    }

    pub async fn delete(&self, event_id: &str) -> Result<(), ApiError> {
        self.api.delete_event(event_id).await
    }
}
