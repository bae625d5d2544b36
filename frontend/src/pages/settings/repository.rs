use crate::api::{ApiClient, ApiError, MessageResponse};

#[derive(Clone)]
pub struct SettingsRepository {
    api: ApiClient,
}

impl SettingsRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn update_profile(&self, full_name: &str) -> Result<MessageResponse, ApiError> {
        self.api.update_profile(full_name).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn update_profile_posts_name() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/user/profile");
            then.status(200).json_body(serde_json::json!({"message": "Profile updated"}));
        });

        let repo = SettingsRepository::new_with_client(ApiClient::new_with_base_url(&server.url("")));
        let res = repo.update_profile("Ada Lovelace").await.unwrap();
        assert_eq!(res.message, "Profile updated");
        let body = server.last_body(POST, "/api/user/profile").unwrap();
        assert_eq!(body["full_name"], "Ada Lovelace");
    }
}
