use crate::{
    components::layout::LoadingSpinner,
    router::use_app_navigate,
    state::auth::{use_auth, AuthState},
};
use leptos::*;

/// Where a guarded page sends the visitor instead, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn auth_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.is_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect("/login")
    }
}

pub fn admin_decision(state: &AuthState) -> GuardDecision {
    match auth_decision(state) {
        GuardDecision::Render if !state.is_admin() => GuardDecision::Redirect("/"),
        other => other,
    }
}

fn guarded(decide: fn(&AuthState) -> GuardDecision, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let navigate = use_app_navigate();
    let decision = create_memo(move |_| auth.with(decide));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate.call(target.to_string());
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner full_page=true /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(auth_decision, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(admin_decision, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};

    fn state(user: Option<crate::api::User>, loading: bool) -> AuthState {
        AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
            notice: None,
        }
    }

    #[test]
    fn guard_waits_then_redirects_anonymous_users() {
        assert_eq!(auth_decision(&state(None, true)), GuardDecision::Wait);
        assert_eq!(
            auth_decision(&state(None, false)),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(
            auth_decision(&state(Some(regular_user()), false)),
            GuardDecision::Render
        );
    }

    #[test]
    fn admin_guard_sends_members_home() {
        assert_eq!(
            admin_decision(&state(Some(regular_user()), false)),
            GuardDecision::Redirect("/")
        );
        assert_eq!(
            admin_decision(&state(Some(admin_user()), false)),
            GuardDecision::Render
        );
        assert_eq!(
            admin_decision(&state(None, false)),
            GuardDecision::Redirect("/login")
        );
    }
}
