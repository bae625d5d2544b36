use super::repository;
use crate::api::{ApiClient, ApiError, Stats, Task};
use crate::state::auth::use_is_admin;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats_resource: Resource<(), Result<Stats, ApiError>>,
    pub my_tasks_resource: Resource<(), Result<Vec<Task>, ApiError>>,
    pub is_admin: Signal<bool>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let api_clone = api.clone();
        let stats_resource = create_resource(
            || (),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_stats(&api).await }
            },
        );

        let my_tasks_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_my_tasks(&api).await }
            },
        );

        Self {
            stats_resource,
            my_tasks_resource,
            is_admin: use_is_admin(),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
