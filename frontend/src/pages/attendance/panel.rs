use super::{
    components::{HistoryTable, LocationConfirmDialog, TodayCard},
    utils::{year_options, HistoryPeriod, MONTHS},
    view_model::AttendanceViewModel,
};
use crate::{geo::BrowserPositionSource, utils::time::today_local};
use chrono::Datelike;
use leptos::*;

const SELECT: &str = "px-3 py-2 rounded-xl border border-border bg-form-control-bg text-sm";

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = AttendanceViewModel::new();
    let state = vm.state;
    let flow = Signal::derive(move || state.with(|s| s.flow.clone()));
    let history = Signal::derive(move || state.with(|s| s.history.clone()));

    let on_punch = Callback::new(move |_| {
        spawn_local(async move {
            let _ = vm.start_punch(&BrowserPositionSource).await;
        });
    });
    let on_confirm = Callback::new(move |_| {
        spawn_local(async move {
            let _ = vm.confirm().await;
        });
    });
    let on_cancel = Callback::new(move |_| vm.cancel());

    let select_period = move |period: HistoryPeriod| {
        spawn_local(async move { vm.select_period(period).await });
    };

    view! {
        <div class="attendance-page space-y-6">
            <header>
                <h2 class="text-2xl font-black text-fg tracking-tight">"Attendance"</h2>
                <p class="text-sm text-fg-muted">"Punch in and out with your current location"</p>
            </header>

            <TodayCard state=state on_punch=on_punch />

            <section class="bg-surface-elevated rounded-2xl border border-border p-6 space-y-4">
                <div class="flex flex-col md:flex-row justify-between md:items-center gap-3">
                    <h3 class="text-lg font-bold">"History"</h3>
                    <div class="flex gap-2">
                        <select
                            class=SELECT
                            aria-label="Month"
                            prop:value=move || vm.period.get().month.to_string()
                            on:change=move |ev| {
                                if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                                    select_period(HistoryPeriod { month, ..vm.period.get_untracked() });
                                }
                            }
                        >
                            {MONTHS
                                .iter()
                                .zip(1u32..)
                                .map(|(name, month)| view! { <option value=month.to_string()>{*name}</option> })
                                .collect_view()}
                        </select>
                        <select
                            class=SELECT
                            aria-label="Year"
                            prop:value=move || vm.period.get().year.to_string()
                            on:change=move |ev| {
                                if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                    select_period(HistoryPeriod { year, ..vm.period.get_untracked() });
                                }
                            }
                        >
                            {year_options(today_local().year())
                                .into_iter()
                                .map(|year| view! { <option value=year.to_string()>{year}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <HistoryTable records=history loading=vm.history_loading />
            </section>

            <LocationConfirmDialog flow=flow on_confirm=on_confirm on_cancel=on_cancel />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_clock_and_history_controls() {
        let html = render_to_string(move || view! { <AttendancePage /> });
        assert!(html.contains("live-clock"));
        assert!(html.contains("Loading..."));
        assert!(html.contains("December"));
        assert!(html.contains("No attendance records for this month"));
    }
}
