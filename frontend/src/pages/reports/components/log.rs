use crate::{
    api::AttendanceRecord,
    components::{common::Avatar, layout::LoadingSpinner},
    pages::attendance::hours_worked,
    utils::time::{format_date, format_time},
};
use leptos::*;

#[component]
pub fn AttendanceLog(
    #[prop(into)] rows: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    move || {
        if loading.get() {
            return view! { <LoadingSpinner /> }.into_view();
        }
        if rows.with(Vec::is_empty) {
            return view! { <p class="text-sm text-fg-muted text-center py-8">"No attendance records"</p> }.into_view();
        }
        view! {
            <table class="attendance-log min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {["Member", "Date", "Punched In", "Punched Out", "Hours", "Status"]
                            .into_iter()
                            .map(|h| view! { <th class="px-6 py-4 text-left text-[11px] font-black text-fg-muted uppercase tracking-widest">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {rows
                        .get()
                        .into_iter()
                        .map(|row| {
                            let name = row.user_name.clone().unwrap_or_else(|| "Admin".to_string());
                            view! {
                                <tr>
                                    <td class="px-6 py-4">
                                        <div class="flex items-center gap-2">
                                            <Avatar name=name.clone() small=true />
                                            <span class="text-sm font-bold">{name}</span>
                                        </div>
                                    </td>
                                    <td class="px-6 py-4 text-sm">{format_date(&row.date)}</td>
                                    <td class="px-6 py-4 text-sm">
                                        {format_time(row.punch_in.as_deref())}
                                        {row.location.clone().map(|loc| view! {
                                            <div class="text-[10px] text-fg-muted truncate max-w-[120px]" title=loc.clone()>{loc}</div>
                                        })}
                                    </td>
                                    <td class="px-6 py-4 text-sm">{format_time(row.punch_out.as_deref())}</td>
                                    <td class="px-6 py-4 text-sm font-semibold">{hours_worked(&row)}</td>
                                    <td class="px-6 py-4 text-xs">{row.status.clone().unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn log_rows_show_member_and_location() {
        let html = render_to_string(move || {
            let rows = vec![AttendanceRecord {
                date: "2025-03-05".into(),
                user_name: Some("Bo Builder".into()),
                punch_in: Some("2025-03-05T09:00:00Z".into()),
                location: Some("MG Road".into()),
                status: Some("Present".into()),
                ..AttendanceRecord::default()
            }];
            view! { <AttendanceLog rows=Signal::derive(move || rows.clone()) loading=Signal::derive(|| false) /> }
        });
        assert!(html.contains("Bo Builder"));
        assert!(html.contains("MG Road"));
        assert!(html.contains("In progress"));
        assert!(html.contains("Present"));
    }
}
