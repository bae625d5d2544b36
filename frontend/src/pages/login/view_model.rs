use super::{repository::LoginRepository, utils};
use crate::{
    api::ApiError,
    identity::LoginRequest,
    router::use_app_navigate,
    state::auth::{self, use_auth},
    utils::browser,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    /// Message left behind by a forced sign-out.
    pub notice: Signal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub google_pending: RwSignal<bool>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(ApiError::validation(msg)));
            return;
        }
        self.error.set(None);
        self.login_action
            .dispatch(utils::build_request(&email, &password));
    }

    pub fn sign_in_with_google(&self) {
        if self.google_pending.get_untracked() {
            return;
        }
        self.google_pending.set(true);
        let repo = LoginRepository::from_context();
        let redirect = utils::oauth_redirect(browser::origin().as_deref());
        spawn_local(async move {
            let url = repo.google_authorize_url(&redirect).await;
            browser::assign(&url);
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let (auth, _) = use_auth();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigate = use_app_navigate();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                    navigate.call("/".to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    // Already signed in (e.g. back from the Google redirect).
    create_effect(move |_| {
        let signed_in = auth.with(|state| !state.loading && state.is_authenticated);
        if signed_in && login_action.value().get_untracked().is_none() {
            navigate.call("/".to_string());
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        notice: Signal::derive(move || auth.with(|state| state.notice.clone())),
        login_action,
        google_pending: create_rw_signal(false),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_auth(None);
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.email.get().is_empty());
            assert!(vm.notice.get().is_none());
        });
    }

    #[test]
    fn submit_without_password_reports_validation_error() {
        with_runtime(|| {
            provide_auth(None);
            let vm = use_login_view_model();
            vm.email.set("ann@digianchorz.com".into());
            vm.submit();
            let error = vm.error.get().expect("validation error");
            assert_eq!(error.error, "Please enter your password");
            assert!(vm.login_action.value().get().is_none());
        });
    }
}
