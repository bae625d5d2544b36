use crate::api::{ApiClient, ApiError, Project, Task, User};
use crate::pages::tasks::repository::TasksRepository;

#[derive(Clone)]
pub struct ProjectDetailsRepository {
    api: ApiClient,
}

impl ProjectDetailsRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    /// Task writes go through the same calls as the task list.
    pub fn tasks(&self) -> TasksRepository {
        TasksRepository::new_with_client(self.api.clone())
    }

    pub async fn load(&self, project_id: &str) -> Result<(Project, Vec<Task>), ApiError> {
        futures::try_join!(
            self.api.get_project(project_id),
            self.api.list_project_tasks(project_id)
        )
    }

    pub async fn team(&self) -> Result<Vec<User>, ApiError> {
        self.api.list_team().await
    }

    pub async fn add_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.api.add_project_member(project_id, user_id).await
    }
}
