use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let on_google = Callback::new(move |_| vm.sign_in_with_google());

    view! {
        <LoginForm
            email=vm.email
            password=vm.password
            error=vm.error
            notice=vm.notice
            pending=pending
            google_pending=vm.google_pending
            on_submit=on_submit
            on_google=on_google
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_shows_brand_and_google_option() {
        let html = render_to_string(move || {
            provide_context(create_signal(AuthState::default()));
            view! { <LoginPanel /> }
        });
        assert!(html.contains("DIGIANCHORZ"));
        assert!(html.contains("Continue with Google"));
        assert!(html.contains("Sign In"));
    }

    #[test]
    fn login_panel_shows_forced_sign_out_notice() {
        let html = render_to_string(move || {
            provide_context(create_signal(AuthState {
                notice: Some("Invalid credential, ask your admin to invite you.".into()),
                ..AuthState::default()
            }));
            view! { <LoginPanel /> }
        });
        assert!(html.contains("ask your admin to invite you"));
    }
}
