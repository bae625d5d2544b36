use super::view_model::ProfileViewModel;
use crate::{
    components::{common::Avatar, error::InlineErrorMessage},
    state::auth::{use_auth, use_refresh_user_action},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let user = auth.with_untracked(|state| state.user.clone());
    let vm = ProfileViewModel::new(user.as_ref());
    let refresh_user = use_refresh_user_action();
    let role = user
        .as_ref()
        .map(|u| u.role.as_str().to_string())
        .unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if vm.save().await.is_ok() {
                refresh_user.dispatch(());
            }
        });
    };

    view! {
        <div class="settings-page max-w-2xl space-y-6">
            <div>
                <h2 class="text-2xl font-black text-fg tracking-tight">"Settings"</h2>
                <p class="text-sm text-fg-muted">"Manage your profile."</p>
            </div>
            <section class="bg-surface-elevated rounded-2xl border border-border p-6 space-y-6">
                <div class="flex items-center gap-4">
                    {move || view! { <Avatar name=vm.full_name.get() /> }}
                    <div>
                        <h3 class="text-lg font-bold">{move || vm.full_name.get()}</h3>
                        <p class="text-xs text-fg-muted uppercase tracking-widest">{role}</p>
                    </div>
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <InlineErrorMessage error=vm.error />
                    <label class="block">
                        <span class="text-sm font-semibold text-fg">"Full Name"</span>
                        <input
                            type="text"
                            name="full_name"
                            required
                            class="mt-1 w-full px-4 py-2.5 rounded-xl border border-border bg-form-control-bg"
                            prop:value=move || vm.full_name.get()
                            on:input=move |ev| vm.full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm font-semibold text-fg">"Email"</span>
                        <input
                            type="email"
                            name="email"
                            readonly
                            class="mt-1 w-full px-4 py-2.5 rounded-xl border border-border bg-surface-muted text-fg-muted cursor-not-allowed"
                            prop:value=move || vm.email.get()
                        />
                        <span class="text-xs text-fg-muted">"Email cannot be changed."</span>
                    </label>
                    <div class="flex justify-end">
                        <button
                            type="submit"
                            class="px-6 py-2.5 rounded-xl bg-brand text-white font-bold disabled:opacity-50"
                            disabled=move || vm.saving.get()
                        >
                            {move || if vm.saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_form_shows_read_only_email() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <SettingsPage /> }
        });
        assert!(html.contains("Mo Member"));
        assert!(html.contains("readonly"));
        assert!(html.contains("Save Changes"));
    }
}
