use super::{repository::ReportsRepository, utils::ExportKind};
use crate::api::{ApiError, AttendanceRecord, Stats, User};
use crate::state::toast::{use_toast, ToastContext};
use crate::utils::{
    download::{export_filename, trigger_csv_download},
    time::today_local,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub stats: RwSignal<Option<Stats>>,
    pub users: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    /// Empty for all members.
    pub selected_user: RwSignal<String>,
    pub log: RwSignal<Vec<AttendanceRecord>>,
    pub log_loading: RwSignal<bool>,
    pub exporting: RwSignal<Option<ExportKind>>,
    repo: StoredValue<ReportsRepository>,
    toasts: ToastContext,
}

impl ReportsViewModel {
    pub fn new() -> Self {
        Self::with_repository(ReportsRepository::from_context())
    }

    pub fn with_repository(repo: ReportsRepository) -> Self {
        let vm = Self {
            stats: create_rw_signal(None),
            users: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            selected_user: create_rw_signal(String::new()),
            log: create_rw_signal(Vec::new()),
            log_loading: create_rw_signal(true),
            exporting: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            futures::join!(vm.reload(), vm.load_log());
        });
        vm
    }

    fn user_filter(&self) -> Option<String> {
        Some(self.selected_user.get_untracked()).filter(|id| !id.is_empty())
    }

    pub async fn reload(&self) {
        match self.repo.get_value().overview().await {
            Ok((stats, users)) => {
                self.stats.set(Some(stats));
                self.users.set(users);
            }
            Err(err) => {
                log::error!("loading reports failed: {}", err);
                self.toasts.error("Failed to load reports");
            }
        }
        self.loading.set(false);
    }

    pub async fn load_log(&self) {
        self.log_loading.set(true);
        let user = self.user_filter();
        match self.repo.get_value().attendance_log(user.as_deref()).await {
            Ok(rows) => self.log.set(rows),
            Err(err) => log::error!("loading attendance log failed: {}", err),
        }
        self.log_loading.set(false);
    }

    pub async fn select_user(&self, user_id: String) {
        self.selected_user.set(user_id);
        self.load_log().await;
    }

    /// Fetches the CSV text for `kind`, honouring the member filter for attendance.
    pub async fn fetch_csv(&self, kind: ExportKind) -> Result<String, ApiError> {
        let repo = self.repo.get_value();
        match kind {
            ExportKind::Tasks => repo.tasks_csv().await,
            ExportKind::Attendance => repo.attendance_csv(self.user_filter().as_deref()).await,
        }
    }

    pub async fn export(&self, kind: ExportKind) {
        if self.exporting.get_untracked().is_some() {
            return;
        }
        self.exporting.set(Some(kind));
        let outcome = match self.fetch_csv(kind).await {
            Ok(csv) => trigger_csv_download(&export_filename(kind.prefix(), today_local()), &csv),
            Err(err) => Err(err.error),
        };
        self.exporting.set(None);
        match outcome {
            Ok(()) => {
                self.toasts.success("Export downloaded");
            }
            Err(message) => {
                log::error!("{} export failed: {}", kind.prefix(), message);
                self.toasts.error("Export failed");
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use serde_json::json;

    fn view_model(server: &MockServer) -> ReportsViewModel {
        let api = ApiClient::new_with_base_url(server.url(""));
        ReportsViewModel::with_repository(ReportsRepository::new_with_client(api))
    }

    #[tokio::test]
    async fn user_filter_narrows_log_and_export() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/attendance-history").query_param("user_id", "u-2");
            then.status(200).json_body(json!([{"date": "2025-03-05", "user_name": "Bo"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/export/attendance").query_param("user_id", "u-2");
            then.status(200).body("date,user\n2025-03-05,Bo\n");
        });
        let vm = view_model(&server);

        vm.select_user("u-2".into()).await;
        assert_eq!(vm.log.with_untracked(|rows| rows[0].user_name.clone()), Some("Bo".to_string()));
        assert!(!vm.log_loading.get_untracked());

        let csv = vm.fetch_csv(ExportKind::Attendance).await.unwrap();
        assert!(csv.contains("2025-03-05,Bo"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn overview_loads_stats_and_team() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/stats");
            then.status(200).json_body(json!({"total_projects": 2, "total_tasks": 5, "task_stats": {"completed": 5}}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/team");
            then.status(200).json_body(json!([{"id": "u-1", "full_name": "Ann", "email": "ann@x.io", "role": "Admin"}]));
        });
        let vm = view_model(&server);

        vm.reload().await;

        assert_eq!(vm.stats.with_untracked(|s| s.as_ref().map(|s| s.task_stats.completion_rate())), Some(100));
        assert_eq!(vm.users.with_untracked(Vec::len), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_export_is_reported() {
        let runtime = create_runtime();
        let toasts = crate::state::toast::provide_toasts();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/export/csv");
            then.status(500).json_body(json!({"error": "boom"}));
        });
        let vm = view_model(&server);

        vm.export(ExportKind::Tasks).await;

        assert_eq!(server.hits(GET, "/api/export/csv"), 1);
        assert_eq!(toasts.toasts().get_untracked()[0].message, "Export failed");
        assert!(vm.exporting.get_untracked().is_none());
        runtime.dispose();
    }
}
