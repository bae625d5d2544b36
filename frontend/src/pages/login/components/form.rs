use crate::{api::ApiError, components::error::InlineErrorMessage, components::layout::BRAND};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] notice: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] google_pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
    on_google: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="login-page min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated p-8 rounded-2xl border border-border">
                <div class="text-center">
                    <div class="brand-mark mx-auto w-14 h-14 rounded-2xl flex items-center justify-center text-white font-bold text-2xl bg-brand">"D"</div>
                    <h2 class="mt-6 text-3xl font-black tracking-tighter uppercase text-fg">{BRAND}</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Sign in to your workspace"</p>
                </div>
                <Show when=move || notice.with(Option::is_some)>
                    <div class="login-notice bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded text-sm">
                        {move || notice.get().unwrap_or_default()}
                    </div>
                </Show>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="mt-1 block w-full px-3 py-2 border border-border rounded-lg bg-form-control-bg text-fg"
                            placeholder="you@digianchorz.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class="mt-1 block w-full px-3 py-2 border border-border rounded-lg bg-form-control-bg text-fg"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-lg text-sm font-semibold text-white bg-brand hover:bg-brand-strong disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="relative text-center text-xs text-fg-muted">
                    <span class="px-2 bg-surface-elevated">"or"</span>
                </div>
                <button
                    type="button"
                    class="google-button w-full flex items-center justify-center gap-2 py-2 px-4 rounded-lg border border-border text-sm font-semibold text-fg disabled:opacity-50"
                    disabled=move || google_pending.get()
                    on:click=move |_| on_google.call(())
                >
                    <i class="fab fa-google"></i>
                    "Continue with Google"
                </button>
            </div>
        </div>
    }
}
