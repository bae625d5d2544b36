use crate::api::{ApiClient, ApiError, Project, Task, TaskDraft, TaskPatch, TaskStatus, User};

/// Everything the task list and its form need.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub team: Vec<User>,
}

#[derive(Clone)]
pub struct TasksRepository {
    api: ApiClient,
}

impl TasksRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub async fn load_board(&self) -> Result<TaskBoard, ApiError> {
        let (tasks, projects, team) = futures::try_join!(
            self.api.list_tasks(),
            self.api.list_projects(),
            self.api.list_team()
        )?;
        Ok(TaskBoard {
            tasks,
            projects,
            team,
        })
    }

    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.api.create_task(draft).await
    }

    pub async fn update(&self, task_id: &str, patch: &TaskPatch) -> Result<(), ApiError> {
        self.api.update_task(task_id, patch).await
    }

    pub async fn set_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        self.api.update_task(task_id, &TaskPatch::status(status)).await
    }

    pub async fn delete(&self, task_id: &str) -> Result<(), ApiError> {
        self.api.delete_task(task_id).await
    }
}
