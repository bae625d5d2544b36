use crate::api::{ApiClient, ApiError, InviteRequest, MessageResponse, User};

#[derive(Clone)]
pub struct TeamRepository {
    api: ApiClient,
}

impl TeamRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn members(&self) -> Result<Vec<User>, ApiError> {
        self.api.list_team().await
    }

    pub async fn invite(&self, request: &InviteRequest) -> Result<MessageResponse, ApiError> {
        self.api.invite_member(request).await
    }

    pub async fn remove(&self, user_id: &str) -> Result<(), ApiError> {
        self.api.remove_member(user_id).await
    }
}
