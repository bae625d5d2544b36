use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{AddMemberRequest, ApiError, Project, ProjectDraft, ProjectPatch, Task},
};

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/api/projects").await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.get_json(&format!("/api/projects/{}", encode_component(project_id)))
            .await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.send_json(Method::POST, "/api/projects", Some(draft))
            .await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        patch: &ProjectPatch,
    ) -> Result<(), ApiError> {
        self.send_empty(
            Method::PATCH,
            &format!("/api/projects/{}", encode_component(project_id)),
            Some(patch),
        )
        .await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.send_empty::<()>(
            Method::DELETE,
            &format!("/api/projects/{}", encode_component(project_id)),
            None,
        )
        .await
    }

    pub async fn add_project_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        let body = AddMemberRequest {
            user_id: user_id.to_string(),
        };
        self.send_empty(
            Method::POST,
            &format!("/api/projects/{}/members", encode_component(project_id)),
            Some(&body),
        )
        .await
    }

    pub async fn list_project_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        self.get_json(&format!("/api/projects/{}/tasks", encode_component(project_id)))
            .await
    }
}
