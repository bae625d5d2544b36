use crate::{
    components::modal::Modal,
    geo::{map_embed_url, LocationFix},
    state::attendance::PunchFlow,
};
use leptos::*;

/// Shows the located position and holds the only button that punches.
#[component]
pub fn LocationConfirmDialog(
    #[prop(into)] flow: Signal<PunchFlow>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || flow.with(PunchFlow::dialog_open));
    let fix = move || flow.with(|f| f.fix().cloned());
    let can_submit = move || flow.with(PunchFlow::can_submit);
    let punching = move || flow.with(PunchFlow::is_punching);

    view! {
        <Modal is_open=is_open title="Confirm Location" on_close=on_cancel>
            <div class="p-6 space-y-4">
                {move || fix().map(|LocationFix { coords, address }| view! {
                    <dl class="grid grid-cols-3 gap-3 text-sm">
                        <div>
                            <dt class="text-xs text-fg-muted uppercase">"Latitude"</dt>
                            <dd class="font-mono">{format!("{:.6}", coords.latitude)}</dd>
                        </div>
                        <div>
                            <dt class="text-xs text-fg-muted uppercase">"Longitude"</dt>
                            <dd class="font-mono">{format!("{:.6}", coords.longitude)}</dd>
                        </div>
                        <div>
                            <dt class="text-xs text-fg-muted uppercase">"Accuracy"</dt>
                            <dd class="font-mono">{format!("{:.0} m", coords.accuracy)}</dd>
                        </div>
                    </dl>
                    <p class="location-address text-sm font-semibold"><i class="fas fa-map-marker-alt mr-2 text-brand"></i>{address}</p>
                    <iframe
                        class="w-full h-56 rounded-xl border border-border"
                        title="Map preview"
                        src=map_embed_url(&coords)
                    ></iframe>
                })}
                <div class="flex justify-end gap-3">
                    <button type="button" class="px-4 py-2 text-fg-muted rounded-lg disabled:opacity-50" disabled=punching on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="confirm-punch px-4 py-2 bg-brand text-white rounded-lg disabled:opacity-50"
                        disabled=move || !can_submit()
                        on:click=move |_| {
                            if can_submit() {
                                on_confirm.call(());
                            }
                        }
                    >
                        {move || if punching() { "Punching..." } else { "Confirm Punch" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
