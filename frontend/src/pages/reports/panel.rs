use super::{
    components::AttendanceLog,
    utils::{summary_cards, ExportKind},
    view_model::ReportsViewModel,
};
use crate::{
    components::{common::StatCard, layout::LoadingSpinner},
    utils::browser,
};
use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = ReportsViewModel::new();
    let export = move |kind: ExportKind| {
        spawn_local(async move { vm.export(kind).await });
    };
    let busy = move |kind: ExportKind| vm.exporting.get() == Some(kind);

    view! {
        <div class="reports-page space-y-6">
            <header class="flex flex-col md:flex-row justify-between md:items-center gap-4">
                <div>
                    <h2 class="text-2xl font-black text-fg tracking-tight">"Reports"</h2>
                    <p class="text-sm text-fg-muted">"Download project metrics and task logs for external analysis."</p>
                </div>
                <div class="flex gap-3 print:hidden">
                    <button type="button" class="px-4 py-2 rounded-xl border border-border text-sm font-semibold" on:click=move |_| browser::print()>
                        <i class="fas fa-print mr-2"></i>"Print"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold disabled:opacity-50"
                        disabled=move || busy(ExportKind::Tasks)
                        on:click=move |_| export(ExportKind::Tasks)
                    >
                        <i class="fas fa-file-csv mr-2"></i>"Export Tasks CSV"
                    </button>
                </div>
            </header>

            {move || match vm.stats.get() {
                None if vm.loading.get() => view! { <LoadingSpinner /> }.into_view(),
                None => ().into_view(),
                Some(stats) => view! {
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        {summary_cards(&stats)
                            .into_iter()
                            .map(|(label, value)| view! { <StatCard label=label value=Signal::derive(move || value.clone()) /> })
                            .collect_view()}
                    </div>
                    <div class="bg-surface-elevated rounded-2xl border border-border p-6">
                        <div class="flex justify-between text-sm font-semibold mb-2">
                            <span>"Completion"</span>
                            <span>{format!("{}%", stats.task_stats.completion_rate())}</span>
                        </div>
                        <div class="h-3 rounded-full bg-surface-muted overflow-hidden">
                            <div class="h-full bg-brand" style=format!("width: {}%", stats.task_stats.completion_rate())></div>
                        </div>
                    </div>
                }
                .into_view(),
            }}

            <section class="bg-surface-elevated rounded-2xl border border-border overflow-hidden">
                <div class="p-6 flex flex-col md:flex-row justify-between md:items-center gap-3">
                    <h3 class="text-xl font-bold">"Team Attendance Log"</h3>
                    <div class="flex items-center gap-2 print:hidden">
                        <select
                            class="px-3 py-2 rounded-xl border border-border bg-form-control-bg text-sm"
                            aria-label="Member"
                            prop:value=move || vm.selected_user.get()
                            on:change=move |ev| {
                                let user = event_target_value(&ev);
                                spawn_local(async move { vm.select_user(user).await });
                            }
                        >
                            <option value="">"All Members"</option>
                            {move || vm.users.get().into_iter().map(|u| view! {
                                <option value=u.id.clone()>{u.display_name()}</option>
                            }).collect_view()}
                        </select>
                        <button
                            type="button"
                            class="p-2 text-fg-muted"
                            aria-label="Refresh log"
                            on:click=move |_| spawn_local(async move { vm.load_log().await })
                        >
                            <i class=move || if vm.log_loading.get() { "fas fa-sync animate-spin" } else { "fas fa-sync" }></i>
                        </button>
                        <button
                            type="button"
                            class="px-3 py-2 rounded-xl border border-border text-sm font-semibold disabled:opacity-50"
                            disabled=move || busy(ExportKind::Attendance)
                            on:click=move |_| export(ExportKind::Attendance)
                        >
                            "Export Attendance"
                        </button>
                    </div>
                </div>
                <div class="overflow-x-auto">
                    <AttendanceLog rows=vm.log loading=vm.log_loading />
                </div>
            </section>
        </div>
    }
}
