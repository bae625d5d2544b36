use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{ApiError, Task, TaskDraft, TaskPatch},
};

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/api/tasks").await
    }

    /// Tasks assigned to the signed-in user, newest first.
    pub async fn list_my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/api/user/tasks").await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.send_json(Method::POST, "/api/tasks", Some(draft)).await
    }

    pub async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<(), ApiError> {
        self.send_empty(
            Method::PATCH,
            &format!("/api/tasks/{}", encode_component(task_id)),
            Some(patch),
        )
        .await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.send_empty::<()>(
            Method::DELETE,
            &format!("/api/tasks/{}", encode_component(task_id)),
            None,
        )
        .await
    }
}
