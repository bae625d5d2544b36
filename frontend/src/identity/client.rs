use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use super::session::{self, IdentitySession, IdentityUser};
use crate::{
    api::{ApiClient, ApiError, User},
    config,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: IdentityUser,
}

impl TokenResponse {
    fn into_session(self, now_secs: i64) -> IdentitySession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        IdentitySession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

#[derive(Clone, Default)]
pub struct IdentityClient {
    http: ApiClient,
    base_url: Option<String>,
    anon_key: Option<String>,
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

impl IdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_settings(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: ApiClient::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            anon_key: Some(anon_key.into()),
        }
    }

    async fn settings(&self) -> (String, String) {
        match (&self.base_url, &self.anon_key) {
            (Some(base), Some(key)) => (base.clone(), key.clone()),
            _ => {
                let resolved = config::await_config().await;
                (
                    self.base_url.clone().unwrap_or(resolved.identity_url),
                    self.anon_key.clone().unwrap_or(resolved.identity_anon_key),
                )
            }
        }
    }

    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let (base, anon_key) = self.settings().await;
        let token = bearer.unwrap_or(&anon_key).to_string();
        self.http
            .http_client()
            .request(method, format!("{}{}", base, path))
            .header("apikey", anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", token))
    }

    pub async fn sign_in_with_password(
        &self,
        request: &LoginRequest,
    ) -> Result<IdentitySession, ApiError> {
        let builder = self
            .request(
                reqwest::Method::POST,
                "/auth/v1/token?grant_type=password",
                None,
            )
            .await
            .json(request);
        let response: TokenResponse = self.http.execute_raw(builder).await?.json()?;
        Ok(response.into_session(now_secs()))
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<IdentitySession, ApiError> {
        let builder = self
            .request(
                reqwest::Method::POST,
                "/auth/v1/token?grant_type=refresh_token",
                None,
            )
            .await
            .json(&serde_json::json!({ "refresh_token": refresh_token }));
        let response: TokenResponse = self.http.execute_raw(builder).await?.json()?;
        Ok(response.into_session(now_secs()))
    }

    pub async fn get_user(&self, access_token: &str) -> Result<IdentityUser, ApiError> {
        let builder = self
            .request(reqwest::Method::GET, "/auth/v1/user", Some(access_token))
            .await;
        self.http.execute_raw(builder).await?.json()
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), ApiError> {
        let builder = self
            .request(reqwest::Method::POST, "/auth/v1/logout", Some(access_token))
            .await;
        self.http.execute_raw(builder).await?.empty()
    }

    /// The `users` row for the session's account. `Ok(None)` when the row
    /// does not exist, which means the account was never invited.
    pub async fn fetch_profile(&self, session: &IdentitySession) -> Result<Option<User>, ApiError> {
        let path = format!(
            "/rest/v1/users?id=eq.{}&select=*",
            crate::api::encode_component(&session.user.id)
        );
        let builder = self
            .request(reqwest::Method::GET, &path, Some(&session.access_token))
            .await
            .header(ACCEPT, "application/vnd.pgrst.object+json");
        let raw = self.http.execute_raw(builder).await?;
        if raw.status.as_u16() == 406 {
            return Ok(None);
        }
        raw.json().map(Some)
    }

    /// Browser URL that starts the OAuth dance for `provider`.
    pub async fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        let (base, _) = self.settings().await;
        build_authorize_url(&base, provider, redirect_to)
    }

    /// Completes an OAuth redirect: builds and stores a session from the URL
    /// fragment. `Ok(None)` when the fragment is not a callback.
    pub async fn session_from_callback(
        &self,
        fragment: &str,
    ) -> Result<Option<IdentitySession>, ApiError> {
        let Some(callback) = session::parse_callback_fragment(fragment, now_secs()) else {
            return Ok(None);
        };
        match callback {
            session::OAuthCallback::Error(message) => Err(ApiError::validation(message)),
            session::OAuthCallback::Tokens {
                access_token,
                refresh_token,
                expires_at,
            } => {
                let user = match self.get_user(&access_token).await {
                    Ok(user) => user,
                    Err(err) => {
                        log::warn!("identity user lookup failed, using token claims: {}", err);
                        let claims = session::decode_claims(&access_token)
                            .ok_or_else(|| ApiError::unknown("Unreadable access token"))?;
                        IdentityUser {
                            id: claims.sub,
                            email: claims.email,
                            user_metadata: claims.user_metadata,
                        }
                    }
                };
                let session = IdentitySession {
                    access_token,
                    refresh_token,
                    expires_at,
                    user,
                };
                session::save_session(&session).map_err(ApiError::unknown)?;
                Ok(Some(session))
            }
        }
    }

    /// Stored session, refreshed first when it is about to expire.
    pub async fn current_session(&self) -> Option<IdentitySession> {
        let stored = session::load_session()?;
        if !stored.is_expired(now_secs()) {
            return Some(stored);
        }
        let Some(refresh_token) = stored.refresh_token.as_deref() else {
            session::clear_session();
            return None;
        };
        match self.refresh_session(refresh_token).await {
            Ok(fresh) => {
                if let Err(err) = session::save_session(&fresh) {
                    log::warn!("could not persist refreshed session: {}", err);
                }
                Some(fresh)
            }
            Err(err) => {
                log::warn!("session refresh failed: {}", err);
                session::clear_session();
                None
            }
        }
    }
}

pub(crate) fn build_authorize_url(base: &str, provider: &str, redirect_to: &str) -> String {
    format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={}",
        base,
        crate::api::encode_component(provider),
        crate::api::encode_component(redirect_to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_encodes_redirect() {
        assert_eq!(
            build_authorize_url("https://id.example.com", "google", "https://app.example.com/"),
            "https://id.example.com/auth/v1/authorize?provider=google&redirect_to=https%3A%2F%2Fapp.example.com%2F"
        );
    }

    #[test]
    fn token_response_computes_expiry() {
        let response: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": {"id": "u-1", "email": "a@b.c"}
        }))
        .unwrap();
        let session = response.into_session(100);
        assert_eq!(session.expires_at, Some(3700));
        assert_eq!(session.user.id, "u-1");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn identity(server: &MockServer) -> IdentityClient {
        IdentityClient::new_with_settings(server.url(""), "anon-key")
    }

    #[tokio::test]
    async fn password_sign_in_sends_apikey() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/auth/v1/token")
                .query_param("grant_type", "password");
            then.status(200).json_body(json!({
                "access_token": "access-1",
                "refresh_token": "refresh-1",
                "expires_in": 3600,
                "user": {"id": "u-1", "email": "ann@example.com"}
            }));
        });

        let session = identity(&server)
            .sign_in_with_password(&LoginRequest {
                email: "ann@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.access_token, "access-1");
        let request = server.last_request(POST, "/auth/v1/token").unwrap();
        assert_eq!(request.header("apikey"), Some("anon-key"));
        assert_eq!(request.body.unwrap()["email"], "ann@example.com");
    }

    #[tokio::test]
    async fn bad_credentials_surface_provider_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/v1/token");
            then.status(400).json_body(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            }));
        });

        let err = identity(&server)
            .sign_in_with_password(&LoginRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error, "Invalid login credentials");
    }

    #[tokio::test]
    async fn missing_profile_row_maps_to_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/users");
            then.status(406)
                .json_body(json!({"code": "PGRST116", "message": "no rows"}));
        });
        let session = IdentitySession {
            access_token: "t".into(),
            refresh_token: None,
            expires_at: None,
            user: IdentityUser {
                id: "u-404".into(),
                ..IdentityUser::default()
            },
        };

        let profile = identity(&server).fetch_profile(&session).await.unwrap();
        assert!(profile.is_none());
        let request = server.last_request(GET, "/rest/v1/users").unwrap();
        assert_eq!(request.query_value("id"), Some("eq.u-404"));
        assert_eq!(request.header("authorization"), Some("Bearer t"));
    }

    #[tokio::test]
    async fn callback_fragment_creates_and_stores_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/user");
            then.status(200)
                .json_body(json!({"id": "u-9", "email": "g@example.com"}));
        });

        let session = identity(&server)
            .session_from_callback("#access_token=tok&refresh_token=ref&expires_in=60")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.user.id, "u-9");
        assert_eq!(session::load_session().unwrap().access_token, "tok");
        session::clear_session();
    }

    #[tokio::test]
    async fn expired_session_is_refreshed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/auth/v1/token")
                .query_param("grant_type", "refresh_token");
            then.status(200).json_body(json!({
                "access_token": "fresh",
                "refresh_token": "refresh-2",
                "expires_in": 3600,
                "user": {"id": "u-1"}
            }));
        });
        session::save_session(&IdentitySession {
            access_token: "stale".into(),
            refresh_token: Some("refresh-1".into()),
            expires_at: Some(10),
            user: IdentityUser {
                id: "u-1".into(),
                ..IdentityUser::default()
            },
        })
        .unwrap();

        let current = identity(&server).current_session().await.unwrap();
        assert_eq!(current.access_token, "fresh");
        assert_eq!(
            server.last_body(POST, "/auth/v1/token").unwrap()["refresh_token"],
            "refresh-1"
        );
        session::clear_session();
    }
}
