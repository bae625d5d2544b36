use reqwest::Method;
use serde::Serialize;

use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, UpdateProfileRequest},
};
use crate::identity::IdentityUser;

#[derive(Debug, Serialize)]
struct SessionSyncRequest<'a> {
    access_token: &'a str,
    user: &'a IdentityUser,
}

impl ApiClient {
    /// Hands the identity provider's session to the backend. A 403 means the
    /// account was never invited.
    pub async fn sync_session(
        &self,
        access_token: &str,
        user: &IdentityUser,
    ) -> Result<(), ApiError> {
        let body = SessionSyncRequest { access_token, user };
        self.send_empty(Method::POST, "/auth/api/set-session", Some(&body))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty::<()>(Method::POST, "/api/logout", None).await
    }

    pub async fn update_profile(&self, full_name: &str) -> Result<MessageResponse, ApiError> {
        let body = UpdateProfileRequest {
            full_name: full_name.to_string(),
        };
        self.send_json(Method::POST, "/api/user/profile", Some(&body))
            .await
    }
}
