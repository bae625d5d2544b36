use crate::{
    components::clock::LiveClock,
    state::attendance::{AttendanceState, PunchStatus},
    utils::time::format_time,
};
use leptos::*;

fn badge_class(status: PunchStatus) -> &'static str {
    match status {
        PunchStatus::Loading => "bg-surface-muted text-fg-muted",
        PunchStatus::NotPunched => "bg-status-warning-bg text-status-warning-text",
        PunchStatus::PunchedIn => "bg-status-success-bg text-status-success-text",
        PunchStatus::Completed => "bg-status-info-bg text-status-info-text",
    }
}

#[component]
pub fn TodayCard(
    #[prop(into)] state: Signal<AttendanceState>,
    on_punch: Callback<()>,
) -> impl IntoView {
    let status = Signal::derive(move || state.with(|s| s.status));
    let locating = Signal::derive(move || state.with(|s| s.flow.is_locating()));
    let punch_in = move || state.with(|s| format_time(s.today.as_ref().and_then(|t| t.punch_in.as_deref())));
    let punch_out = move || state.with(|s| format_time(s.today.as_ref().and_then(|t| t.punch_out.as_deref())));
    let disabled = move || {
        matches!(status.get(), PunchStatus::Completed | PunchStatus::Loading) || locating.get()
    };

    view! {
        <div class="today-card bg-surface-elevated rounded-2xl border border-border p-6 flex flex-col md:flex-row md:items-center justify-between gap-6">
            <div class="space-y-3">
                <LiveClock large=true />
                <span class=move || format!("status-badge inline-block px-3 py-1 rounded-full text-xs font-bold {}", badge_class(status.get()))>
                    {move || status.get().badge()}
                </span>
                <div class="flex gap-6 text-sm">
                    <div>
                        <p class="text-xs text-fg-muted uppercase tracking-widest">"Punch In"</p>
                        <p class="font-semibold">{punch_in}</p>
                    </div>
                    <div>
                        <p class="text-xs text-fg-muted uppercase tracking-widest">"Punch Out"</p>
                        <p class="font-semibold">{punch_out}</p>
                    </div>
                </div>
            </div>
            <button
                type="button"
                class="punch-button px-8 py-4 rounded-2xl bg-brand text-white text-lg font-black disabled:opacity-50"
                disabled=disabled
                on:click=move |_| on_punch.call(())
            >
                {move || if locating.get() {
                    view! { <i class="fas fa-spinner fa-spin mr-2"></i>"Locating..." }.into_view()
                } else {
                    status.get().action_label().into_view()
                }}
            </button>
        </div>
    }
}
