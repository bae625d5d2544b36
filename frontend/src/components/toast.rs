use crate::state::toast::use_toast;
use leptos::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-container fixed top-4 right-4 z-[80] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.toasts().get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(&id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
