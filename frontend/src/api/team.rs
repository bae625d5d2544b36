use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{ApiError, InviteRequest, MessageResponse, User},
};

impl ApiClient {
    pub async fn list_team(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/team").await
    }

    pub async fn invite_member(&self, request: &InviteRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "/api/invite", Some(request)).await
    }

    pub async fn remove_member(&self, user_id: &str) -> Result<(), ApiError> {
        self.send_empty::<()>(
            Method::DELETE,
            &format!("/api/team/{}", encode_component(user_id)),
            None,
        )
        .await
    }
}
