use crate::{
    api::{ApiError, User},
    identity::{IdentitySession, LoginRequest, INVITE_REQUIRED_MESSAGE},
    pages::login::repository::LoginRepository,
    utils::browser,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    /// Shown on the login page after a forced sign-out.
    pub notice: Option<String>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Result of bringing an identity session into the app.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Ready(User),
    /// The backend or the users table does not know this account.
    Rejected(String),
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    #[cfg(target_arch = "wasm32")]
    {
        let repo = LoginRepository::from_context();
        spawn_local(async move {
            let fragment = browser::hash();
            match repo.restore(fragment.as_deref()).await {
                Ok(Some(session)) => {
                    let outcome = establish_session(&repo, &session).await;
                    apply_outcome(outcome, set_auth_state);
                }
                Ok(None) => set_signed_out(set_auth_state, None),
                Err(err) => {
                    log::warn!("session restore failed: {}", err);
                    set_signed_out(set_auth_state, Some(err.error));
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    set_auth_state.update(|state| state.loading = false);

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_is_admin() -> Signal<bool> {
    let (auth, _) = use_auth();
    Signal::derive(move || auth.with(AuthState::is_admin))
}

/// Syncs the session with the backend, then loads the profile row. Accounts
/// either side rejects are signed out again.
pub async fn establish_session(
    repo: &LoginRepository,
    session: &IdentitySession,
) -> SessionOutcome {
    if let Err(err) = repo.sync(session).await {
        if err.is_forbidden() {
            log::error!("session rejected by backend: {}", err);
            let message = err
                .server_message()
                .unwrap_or(INVITE_REQUIRED_MESSAGE)
                .to_string();
            repo.sign_out().await;
            return SessionOutcome::Rejected(message);
        }
        log::warn!("session sync failed, using identity user: {}", err);
        return SessionOutcome::Ready(session.user.to_fallback_user());
    }

    match repo.profile(session).await {
        Ok(Some(profile)) => SessionOutcome::Ready(session.user.merge_profile(profile)),
        Ok(None) => {
            log::error!("no profile row for {}", session.user.id);
            repo.sign_out().await;
            SessionOutcome::Rejected(INVITE_REQUIRED_MESSAGE.to_string())
        }
        Err(err) => {
            log::warn!("profile lookup failed, using identity user: {}", err);
            SessionOutcome::Ready(session.user.to_fallback_user())
        }
    }
}

fn set_signed_out(set_auth_state: WriteSignal<AuthState>, notice: Option<String>) {
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
        state.notice = notice;
    });
}

pub fn apply_outcome(outcome: SessionOutcome, set_auth_state: WriteSignal<AuthState>) {
    match outcome {
        SessionOutcome::Ready(user) => set_auth_state.update(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
            state.loading = false;
            state.notice = None;
        }),
        SessionOutcome::Rejected(message) => {
            browser::alert(&message);
            set_signed_out(set_auth_state, Some(message));
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let session = match repo.sign_in(&request).await {
        Ok(session) => session,
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            return Err(error);
        }
    };
    match establish_session(repo, &session).await {
        SessionOutcome::Ready(user) => {
            apply_outcome(SessionOutcome::Ready(user), set_auth_state);
            Ok(())
        }
        SessionOutcome::Rejected(message) => {
            apply_outcome(SessionOutcome::Rejected(message.clone()), set_auth_state);
            Err(ApiError::http(403, message))
        }
    }
}

pub async fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.sign_out().await;
    set_signed_out(set_auth_state, None);
}

/// Re-reads the profile for the stored session, e.g. after editing it.
pub async fn refresh_user(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    let Some(session) = repo.stored_session() else {
        return;
    };
    let outcome = establish_session(repo, &session).await;
    apply_outcome(outcome, set_auth_state);
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

pub fn use_refresh_user_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { refresh_user(&repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, Role};
    use crate::identity::{session, IdentityClient};
    use serde_json::json;

    fn repository(backend: &MockServer, identity: &MockServer) -> LoginRepository {
        LoginRepository::new_with_clients(
            ApiClient::new_with_base_url(backend.url("")),
            IdentityClient::new_with_settings(identity.url(""), "anon-key"),
        )
    }

    fn mock_sign_in(identity: &MockServer) {
        identity.mock(|when, then| {
            when.method(POST)
                .path("/auth/v1/token")
                .query_param("grant_type", "password");
            then.status(200).json_body(json!({
                "access_token": "access-1",
                "refresh_token": "refresh-1",
                "expires_in": 3600,
                "user": {
                    "id": "u-1",
                    "email": "ann@example.com",
                    "user_metadata": {"full_name": "Ann from Google"}
                }
            }));
        });
        identity.mock(|when, then| {
            when.method(POST).path("/auth/v1/logout");
            then.status(204).body("");
        });
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "ann@example.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_syncs_then_loads_profile() {
        let backend = MockServer::start_async().await;
        let identity = MockServer::start_async().await;
        mock_sign_in(&identity);
        backend.mock(|when, then| {
            when.method(POST).path("/auth/api/set-session");
            then.status(200).json_body(json!({"message": "ok"}));
        });
        identity.mock(|when, then| {
            when.method(GET).path("/rest/v1/users");
            then.status(200).json_body(json!({
                "id": "u-1",
                "full_name": "Ann Admin",
                "email": "ann@example.com",
                "role": "Admin"
            }));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = repository(&backend, &identity);

        login_request(credentials(), &repo, set_state).await.unwrap();

        let snapshot = state.get_untracked();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin());
        assert_eq!(snapshot.user.unwrap().full_name, "Ann Admin");
        let sync = backend.last_body(POST, "/auth/api/set-session").unwrap();
        assert_eq!(sync["access_token"], "access-1");
        assert_eq!(sync["user"]["id"], "u-1");

        backend.mock(|when, then| {
            when.method(POST).path("/api/logout");
            then.status(200).json_body(json!({}));
        });
        logout(&repo, set_state).await;
        assert!(!state.get_untracked().is_authenticated);
        assert!(session::load_session().is_none());
        assert_eq!(identity.hits(POST, "/auth/v1/logout"), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn forbidden_sync_forces_sign_out() {
        let backend = MockServer::start_async().await;
        let identity = MockServer::start_async().await;
        mock_sign_in(&identity);
        backend.mock(|when, then| {
            when.method(POST).path("/auth/api/set-session");
            then.status(403)
                .json_body(json!({"error": "Account is not invited"}));
        });
        backend.mock(|when, then| {
            when.method(POST).path("/api/logout");
            then.status(200).json_body(json!({}));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = repository(&backend, &identity);

        let err = login_request(credentials(), &repo, set_state)
            .await
            .unwrap_err();

        assert_eq!(err.error, "Account is not invited");
        assert!(err.is_forbidden());
        let snapshot = state.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert_eq!(snapshot.notice.as_deref(), Some("Account is not invited"));
        assert_eq!(identity.hits(GET, "/rest/v1/users"), 0);
        assert!(session::load_session().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn forbidden_sync_without_message_asks_for_invite() {
        let backend = MockServer::start_async().await;
        let identity = MockServer::start_async().await;
        mock_sign_in(&identity);
        backend.mock(|when, then| {
            when.method(POST).path("/auth/api/set-session");
            then.status(403).json_body(json!({}));
        });
        backend.mock(|when, then| {
            when.method(POST).path("/api/logout");
            then.status(200).json_body(json!({}));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = repository(&backend, &identity);

        let err = login_request(credentials(), &repo, set_state)
            .await
            .unwrap_err();

        assert_eq!(err.error, INVITE_REQUIRED_MESSAGE);
        assert_eq!(
            state.get_untracked().notice.as_deref(),
            Some(INVITE_REQUIRED_MESSAGE)
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_profile_row_forces_sign_out() {
        let backend = MockServer::start_async().await;
        let identity = MockServer::start_async().await;
        mock_sign_in(&identity);
        backend.mock(|when, then| {
            when.method(POST).path("/auth/api/set-session");
            then.status(200).json_body(json!({}));
        });
        backend.mock(|when, then| {
            when.method(POST).path("/api/logout");
            then.status(200).json_body(json!({}));
        });
        identity.mock(|when, then| {
            when.method(GET).path("/rest/v1/users");
            then.status(406).json_body(json!({"code": "PGRST116"}));
        });
        let repo = repository(&backend, &identity);
        let session = repo.sign_in(&credentials()).await.unwrap();

        let outcome = establish_session(&repo, &session).await;

        assert_eq!(
            outcome,
            SessionOutcome::Rejected(INVITE_REQUIRED_MESSAGE.to_string())
        );
        assert_eq!(backend.hits(POST, "/api/logout"), 1);
    }

    #[tokio::test]
    async fn failing_sync_keeps_identity_user() {
        let backend = MockServer::start_async().await;
        let identity = MockServer::start_async().await;
        mock_sign_in(&identity);
        backend.mock(|when, then| {
            when.method(POST).path("/auth/api/set-session");
            then.status(500).json_body(json!({"error": "boom"}));
        });
        let repo = repository(&backend, &identity);
        let session = repo.sign_in(&credentials()).await.unwrap();

        let outcome = establish_session(&repo, &session).await;

        match outcome {
            SessionOutcome::Ready(user) => {
                assert_eq!(user.full_name, "Ann from Google");
                assert_eq!(user.role, Role::Member);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        session::clear_session();
    }
}
