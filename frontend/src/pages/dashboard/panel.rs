use crate::{
    components::clock::use_now,
    pages::dashboard::{
        components::{ChartsSection, MyTasksSection, SummarySection},
        utils::greeting,
        view_model::use_dashboard_view_model,
    },
    state::auth::use_auth,
    utils::time::format_clock,
};
use chrono::Timelike;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let now = use_now();
    let heading = move || auth.with(|state| greeting(now.get().hour(), state.user.as_ref()));

    view! {
        <div class="dashboard space-y-8">
            <header class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div>
                    <h2 class="text-2xl font-black text-fg tracking-tight">{heading}</h2>
                    <p class="text-sm text-fg-muted">"Dashboard Overview"</p>
                </div>
                <div class="flex items-center gap-3">
                    <Show when=move || vm.is_admin.get()>
                        <span class="admin-chip px-3 py-1 rounded-2xl text-xs font-black uppercase tracking-widest bg-fg text-surface">"Admin Mode"</span>
                    </Show>
                    <span class="font-mono text-lg font-semibold">{move || format_clock(&now.get())}</span>
                </div>
            </header>
            <SummarySection stats=vm.stats_resource is_admin=vm.is_admin />
            <ChartsSection stats=vm.stats_resource />
            <MyTasksSection tasks=vm.my_tasks_resource />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_greets_user_while_loading() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Mo Member"));
        assert!(html.contains("My Tasks"));
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Admin Mode"));
    }

    #[test]
    fn admin_sees_admin_chip() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Admin Mode"));
    }
}
