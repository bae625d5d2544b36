use crate::{
    api::{ApiClient, ApiError, MessageResponse, User},
    identity::{session, IdentityClient, IdentitySession, LoginRequest},
    utils::browser,
};
use leptos::use_context;

/// Backend and identity provider calls behind sign-in and sign-out.
#[derive(Clone, Default)]
pub struct LoginRepository {
    api: ApiClient,
    identity: IdentityClient,
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_clients(api: ApiClient, identity: IdentityClient) -> Self {
        Self { api, identity }
    }

    pub fn from_context() -> Self {
        Self {
            api: use_context::<ApiClient>().unwrap_or_default(),
            identity: use_context::<IdentityClient>().unwrap_or_default(),
        }
    }

    pub async fn sign_in(&self, request: &LoginRequest) -> Result<IdentitySession, ApiError> {
        let session = self.identity.sign_in_with_password(request).await?;
        session::save_session(&session).map_err(ApiError::unknown)?;
        Ok(session)
    }

    pub async fn google_authorize_url(&self, redirect_to: &str) -> String {
        self.identity.authorize_url("google", redirect_to).await
    }

    /// Session from an OAuth redirect in `fragment` if there is one, otherwise
    /// the stored session.
    pub async fn restore(&self, fragment: Option<&str>) -> Result<Option<IdentitySession>, ApiError> {
        if let Some(fragment) = fragment.filter(|f| is_callback_fragment(f)) {
            let adopted = self.identity.session_from_callback(fragment).await;
            browser::clear_hash();
            if let Some(session) = adopted? {
                return Ok(Some(session));
            }
        }
        Ok(self.identity.current_session().await)
    }

    pub fn stored_session(&self) -> Option<IdentitySession> {
        session::load_session()
    }

    pub async fn sync(&self, session: &IdentitySession) -> Result<(), ApiError> {
        self.api
            .sync_session(&session.access_token, &session.user)
            .await
    }

    pub async fn profile(&self, session: &IdentitySession) -> Result<Option<User>, ApiError> {
        self.identity.fetch_profile(session).await
    }

    /// Signs out everywhere it can and forgets the stored session. Remote
    /// failures are logged only.
    pub async fn sign_out(&self) {
        if let Some(current) = session::load_session() {
            if let Err(err) = self.identity.sign_out(&current.access_token).await {
                log::warn!("identity sign-out failed: {}", err);
            }
        }
        if let Err(err) = self.api.logout().await {
            log::debug!("backend logout failed: {}", err);
        }
        session::clear_session();
    }

    pub async fn update_profile(&self, full_name: &str) -> Result<MessageResponse, ApiError> {
        self.api.update_profile(full_name).await
    }
}

pub fn is_callback_fragment(fragment: &str) -> bool {
    let fragment = fragment.trim_start_matches('#');
    fragment
        .split('&')
        .any(|pair| pair.starts_with("access_token=") || pair.starts_with("error="))
}
