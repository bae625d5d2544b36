use crate::api::{ApiClient, ApiError, Project, ProjectDraft, ProjectPatch, ProjectStatus, User};

#[derive(Clone)]
pub struct ProjectsRepository {
    api: ApiClient,
}

impl ProjectsRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.api.list_projects().await
    }

    pub async fn team(&self) -> Result<Vec<User>, ApiError> {
        self.api.list_team().await
    }

    pub async fn create(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        self.api.create_project(draft).await.map(|_| ())
    }

    pub async fn set_status(&self, project_id: &str, status: ProjectStatus) -> Result<(), ApiError> {
        let patch = ProjectPatch {
            status: Some(status),
            ..ProjectPatch::default()
        };
        self.api.update_project(project_id, &patch).await
    }

    pub async fn delete(&self, project_id: &str) -> Result<(), ApiError> {
        self.api.delete_project(project_id).await
    }
}
