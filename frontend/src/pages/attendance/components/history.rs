use crate::{
    api::AttendanceRecord,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::attendance::utils::hours_worked,
    utils::time::{format_date, format_time},
};
use leptos::*;

#[component]
pub fn HistoryTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    move || {
        if loading.get() {
            return view! { <LoadingSpinner /> }.into_view();
        }
        if records.with(Vec::is_empty) {
            return view! { <EmptyState title="No attendance records for this month" icon="calendar-times" /> }
                .into_view();
        }
        view! {
            <div class="overflow-x-auto">
                <table class="history-table min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Date"</th>
                            <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Punch In"</th>
                            <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Punch Out"</th>
                            <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Hours"</th>
                            <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Location"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {records
                            .get()
                            .into_iter()
                            .map(|record| view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-semibold">{format_date(&record.date)}</td>
                                    <td class="px-4 py-3 text-sm">{format_time(record.punch_in.as_deref())}</td>
                                    <td class="px-4 py-3 text-sm">{format_time(record.punch_out.as_deref())}</td>
                                    <td class="px-4 py-3 text-sm">{hours_worked(&record)}</td>
                                    <td class="px-4 py-3 text-xs text-fg-muted">{record.location.clone().unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view()
    }
}
