use super::modal::Modal;
use leptos::*;

fn label_or(label: MaybeSignal<String>, fallback: &'static str) -> Signal<String> {
    Signal::derive(move || {
        let text = label.get();
        if text.trim().is_empty() {
            fallback.to_string()
        } else {
            text
        }
    })
}

/// Yes/no prompt in a modal. Escape, the backdrop and Cancel all cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let confirm_text = label_or(confirm_label, "Confirm");
    let cancel_text = label_or(cancel_label, "Cancel");
    let confirm_class = format!(
        "confirm-button inline-flex items-center rounded-xl px-4 py-2 text-sm font-bold disabled:opacity-50 {}",
        if destructive {
            "bg-status-error-text text-white"
        } else {
            "bg-brand text-white"
        }
    );

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="confirm-message text-sm text-fg-muted">{move || message.get()}</p>
            <div class="mt-6 flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-xl px-4 py-2 text-sm font-semibold border border-border text-fg"
                    on:click=move |_| on_cancel.call(())
                >
                    {move || cancel_text.get()}
                </button>
                <button
                    type="button"
                    class=confirm_class.clone()
                    disabled=move || confirm_disabled.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_text.get()}
                </button>
            </div>
        </Modal>
    }
}
