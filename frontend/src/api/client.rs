use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, identity::session as identity_session, utils::browser};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Status and body of a completed exchange, read in full.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn into_error(self) -> ApiError {
        let status = self.status.as_u16();
        let parsed: ErrorBody = serde_json::from_str(&self.body).unwrap_or_default();
        let error_text = parsed.error.as_ref().and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Object(obj) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        });
        let message = parsed
            .error_description
            .or(parsed.msg)
            .or(error_text)
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty());
        let mut error = match message {
            Some(message) => ApiError::from_server(status, message),
            None => ApiError::http(status, format!("Request failed with status {}", status)),
        };
        error.details = parsed.details;
        error
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.into_error());
        }
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub fn empty(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn get_auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(session) = identity_session::load_session() {
            match format!("Bearer {}", session.access_token).parse() {
                Ok(value) => {
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("stored access token is not a valid header value"),
            }
        }
        headers
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API rejected the session; signing out locally");
            identity_session::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        if browser::pathname().as_deref() == Some("/login") {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        browser::assign("/login");
    }

    /// Sends an application request carrying the session bearer token.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let raw = self.execute_raw(builder.headers(self.get_auth_headers())).await?;
        Self::handle_unauthorized_status(raw.status);
        Ok(raw)
    }

    /// Sends a request exactly as built; callers own its headers.
    pub(crate) async fn execute_raw(
        &self,
        builder: RequestBuilder,
    ) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().clone();
        let raw = self.dispatch(request).await?;
        if raw.is_success() {
            log::debug!("{} {} -> {}", method, url.path(), raw.status);
        } else {
            log::warn!("{} {} -> {}", method, url.path(), raw.status);
        }
        Ok(raw)
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<RawResponse, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = find_mock(request.url().as_str()) {
                let response = responder.respond(&request)?;
                let status = StatusCode::from_u16(response.status)
                    .map_err(|e| ApiError::unknown(format!("Invalid mock status: {}", e)))?;
                return Ok(RawResponse {
                    status,
                    body: response.body,
                });
            }
        }
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse { status, body })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path).await;
        self.execute(self.client.get(url)).await?.json()
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder).await?.json()
    }

    /// Like [`send_json`](Self::send_json) but ignores the success body.
    pub(crate) async fn send_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path).await;
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder).await?.empty()
    }

    pub(crate) async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let url = self.endpoint(path).await;
        let raw = self.execute(self.client.get(url)).await?;
        if raw.is_success() {
            Ok(raw.body)
        } else {
            Err(raw.into_error())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hooks::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_hooks::find_mock;
