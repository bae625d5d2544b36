use leptos::ev::KeyboardEvent;
use leptos::*;

pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Dialog shell shared by every form popup. Escape, the backdrop and the
/// close button all call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let panel_class = if wide {
        "relative z-[61] w-full max-w-3xl rounded-lg bg-surface-elevated shadow-xl border border-border"
    } else {
        "relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border"
    };
    view! {
        <Show when=move || is_open.get()>
            <div class="modal fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="modal-backdrop absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if is_escape(&ev.key()) {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-center justify-between border-b border-border px-6 py-4">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    <div class="px-6 py-4 max-h-[80vh] overflow-y-auto">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
