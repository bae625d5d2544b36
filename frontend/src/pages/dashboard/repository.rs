use crate::api::{ApiClient, ApiError, Stats, Task};

use super::utils::upcoming_tasks;

pub const MY_TASKS_LIMIT: usize = 5;

pub async fn fetch_stats(api: &ApiClient) -> Result<Stats, ApiError> {
    api.get_stats().await.map_err(|err| {
        log::error!("dashboard stats failed: {}", err);
        err
    })
}

/// The signed-in user's tasks, soonest deadline first.
pub async fn fetch_my_tasks(api: &ApiClient) -> Result<Vec<Task>, ApiError> {
    let tasks = api.list_my_tasks().await?;
    Ok(upcoming_tasks(tasks, MY_TASKS_LIMIT))
}
