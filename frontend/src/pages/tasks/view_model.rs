use super::{
    repository::{TaskBoard, TasksRepository},
    utils::{self, TaskFormValues},
};
use crate::api::{ApiError, Project, Task, TaskPriority, TaskStatus, User};
use crate::state::toast::{use_toast, ToastContext};
use leptos::*;

/// Form fields shared by the create and edit modals.
#[derive(Clone, Copy)]
pub struct TaskFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub project: RwSignal<String>,
    pub assignee: RwSignal<String>,
    pub priority: RwSignal<TaskPriority>,
    pub deadline: RwSignal<String>,
}

impl Default for TaskFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            project: create_rw_signal(String::new()),
            assignee: create_rw_signal(String::new()),
            priority: create_rw_signal(TaskPriority::Medium),
            deadline: create_rw_signal(String::new()),
        }
    }
}

impl TaskFormState {
    pub fn values(&self) -> TaskFormValues {
        TaskFormValues {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            project: self.project.get_untracked(),
            assignee: self.assignee.get_untracked(),
            priority: self.priority.get_untracked(),
            deadline: self.deadline.get_untracked(),
        }
    }

    pub fn load(&self, values: TaskFormValues) {
        self.title.set(values.title);
        self.description.set(values.description);
        self.project.set(values.project);
        self.assignee.set(values.assignee);
        self.priority.set(values.priority);
        self.deadline.set(values.deadline);
    }

    pub fn reset(&self) {
        self.load(TaskFormValues::default());
    }
}

/// Sets a task's status locally, saves it, and puts the old status back if
/// the save fails.
pub async fn set_status_optimistic(
    repo: &TasksRepository,
    tasks: RwSignal<Vec<Task>>,
    task_id: &str,
    status: TaskStatus,
) -> Result<(), ApiError> {
    let previous = tasks.with_untracked(|list| {
        list.iter()
            .find(|task| task.id == task_id)
            .map(|task| task.status)
    });
    let Some(previous) = previous else {
        return Err(ApiError::validation("Task not found"));
    };
    let write = |value: TaskStatus| {
        tasks.update(|list| {
            if let Some(task) = list.iter_mut().find(|task| task.id == task_id) {
                task.status = value;
            }
        })
    };
    write(status);
    match repo.set_status(task_id, status).await {
        Ok(()) => Ok(()),
        Err(err) => {
            log::warn!("status update for task {} failed: {}", task_id, err);
            write(previous);
            Err(err)
        }
    }
}

#[derive(Clone, Copy)]
pub struct TasksViewModel {
    pub tasks: RwSignal<Vec<Task>>,
    pub projects: RwSignal<Vec<Project>>,
    pub team: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub search: RwSignal<String>,
    pub status_filter: RwSignal<Option<TaskStatus>>,
    pub form: TaskFormState,
    pub form_error: RwSignal<Option<ApiError>>,
    /// `None` while creating, the task id while editing.
    pub editing: RwSignal<Option<String>>,
    pub form_open: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Task>>,
    /// Task shown in the read-only details popup.
    pub viewing: RwSignal<Option<Task>>,
    repo: StoredValue<TasksRepository>,
    toasts: ToastContext,
}

impl TasksViewModel {
    pub fn new() -> Self {
        Self::with_repository(TasksRepository::from_context())
    }

    pub fn with_repository(repo: TasksRepository) -> Self {
        let vm = Self {
            tasks: create_rw_signal(Vec::new()),
            projects: create_rw_signal(Vec::new()),
            team: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            load_error: create_rw_signal(None),
            search: create_rw_signal(String::new()),
            status_filter: create_rw_signal(None),
            form: TaskFormState::default(),
            form_error: create_rw_signal(None),
            editing: create_rw_signal(None),
            form_open: create_rw_signal(false),
            saving: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            viewing: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            vm.reload().await;
        });
        vm
    }

    pub fn visible_tasks(&self) -> Signal<Vec<Task>> {
        let (tasks, search, status) = (self.tasks, self.search, self.status_filter);
        Signal::derive(move || {
            tasks.with(|list| search.with(|needle| utils::filter_tasks(list, needle, status.get())))
        })
    }

    pub async fn reload(&self) {
        self.loading.set(true);
        let repo = self.repo.get_value();
        match repo.load_board().await {
            Ok(TaskBoard {
                tasks,
                projects,
                team,
            }) => {
                self.tasks.set(tasks);
                self.projects.set(projects);
                self.team.set(team);
                self.load_error.set(None);
            }
            Err(err) => {
                log::error!("loading tasks failed: {}", err);
                self.toasts.error(format!("Failed to load data: {}", err.error));
                self.load_error.set(Some(err));
            }
        }
        self.loading.set(false);
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.form_error.set(None);
        self.editing.set(None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, task: &Task) {
        self.form.load(TaskFormValues::from_task(task));
        self.form_error.set(None);
        self.editing.set(Some(task.id.clone()));
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.editing.set(None);
    }

    /// Creates or updates from the form. Validation errors stay inline and
    /// never reach the network.
    pub async fn save(&self) -> Result<(), ApiError> {
        if self.saving.get_untracked() {
            return Ok(());
        }
        let values = self.form.values();
        let repo = self.repo.get_value();
        let toasts = self.toasts;
        let editing = self.editing.get_untracked();

        let result = match &editing {
            None => {
                let draft = values.to_draft().map_err(ApiError::validation);
                match draft {
                    Err(err) => Err(err),
                    Ok(draft) => {
                        self.saving.set(true);
                        let created = repo.create(&draft).await;
                        self.saving.set(false);
                        created.map(|_| "Task created successfully!")
                    }
                }
            }
            Some(task_id) => {
                let patch = values.to_patch().map_err(ApiError::validation);
                match patch {
                    Err(err) => Err(err),
                    Ok(patch) => {
                        self.saving.set(true);
                        let saved = repo.update(task_id, &patch).await;
                        self.saving.set(false);
                        saved.map(|()| {
                            let (projects, team) =
                                (self.projects.get_untracked(), self.team.get_untracked());
                            self.tasks.update(|list| {
                                if let Some(task) = list.iter_mut().find(|t| &t.id == task_id) {
                                    utils::apply_patch(task, &patch, &projects, &team);
                                }
                            });
                            "Task updated successfully!"
                        })
                    }
                }
            }
        };

        match result {
            Ok(message) => {
                self.close_form();
                toasts.success(message);
                if editing.is_none() {
                    self.reload().await;
                }
                Ok(())
            }
            Err(err) => {
                if err.code != "VALIDATION_ERROR" {
                    let fallback = if editing.is_some() { "Error updating task" } else { "Error creating task" };
                    toasts.error(err.message_or(fallback));
                }
                self.form_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }

    /// Advances the status one step: To Do → In Progress → Completed → To Do.
    pub async fn cycle_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        let current = self
            .tasks
            .with_untracked(|list| list.iter().find(|t| t.id == task_id).map(|t| t.status))
            .ok_or_else(|| ApiError::validation("Task not found"))?;
        let next = current.next();
        let repo = self.repo.get_value();
        let toasts = self.toasts;
        match set_status_optimistic(&repo, self.tasks, task_id, next).await {
            Ok(()) => {
                toasts.success(format!("Updated to {}", next.as_str()));
                Ok(next)
            }
            Err(err) => {
                toasts.error("Failed to update status");
                Err(err)
            }
        }
    }

    pub fn open_details(&self, task: Task) {
        self.viewing.set(Some(task));
    }

    pub fn close_details(&self) {
        self.viewing.set(None);
    }

    pub fn request_delete(&self, task: Task) {
        self.pending_delete.set(Some(task));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(task) = self.pending_delete.get_untracked() else {
            return Ok(());
        };
        let repo = self.repo.get_value();
        let toasts = self.toasts;
        match repo.delete(&task.id).await {
            Ok(()) => {
                self.tasks.update(|list| list.retain(|t| t.id != task.id));
                self.pending_delete.set(None);
                if self.viewing.with_untracked(|v| v.as_ref().is_some_and(|v| v.id == task.id)) {
                    self.viewing.set(None);
                }
                toasts.success("Task deleted successfully");
                Ok(())
            }
            Err(err) => {
                toasts.error("Error deleting task");
                Err(err)
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

    fn row(id: &str, status: &str) -> serde_json::Value {
        json!({"id": id, "title": format!("Task {}", id), "status": status, "priority": "High"})
    }

    fn server_with_board() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks");
            then.status(200).json_body(json!([row("t-1", "To Do"), row("t-2", "Completed")]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).json_body(json!([{"id": "p-1", "title": "Website"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/team");
            then.status(200).json_body(json!([{"id": "u-1", "full_name": "Ann", "email": "ann@x.io", "role": "Admin"}]));
        });
        server
    }

    fn view_model(server: &MockServer) -> TasksViewModel {
        let api = ApiClient::new_with_base_url(server.url(""));
        TasksViewModel::with_repository(TasksRepository::new_with_client(api))
    }

    #[tokio::test]
    async fn reload_fills_lists_and_filters_by_status() {
        let runtime = create_runtime();
        let server = server_with_board();
        let vm = view_model(&server);

        vm.reload().await;
        assert!(!vm.loading.get_untracked());
        assert_eq!(vm.projects.get_untracked().len(), 1);

        vm.status_filter.set(Some(TaskStatus::Completed));
        let visible = vm.visible_tasks().get_untracked();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "t-2");
        runtime.dispose();
    }

    #[tokio::test]
    async fn status_cycle_rolls_back_on_failure() {
        let runtime = create_runtime();
        let server = server_with_board();
        server.mock(|when, then| {
            when.method(PATCH).path("/api/tasks/t-1");
            then.status(500).json_body(json!({"error": "boom"}));
        });
        let vm = view_model(&server);
        vm.reload().await;

        let err = vm.cycle_status("t-1").await.unwrap_err();

        assert_eq!(err.error, "boom");
        assert_eq!(
            server.last_body(PATCH, "/api/tasks/t-1").unwrap(),
            json!({"status": "In Progress"})
        );
        let status = vm.tasks.with_untracked(|list| list[0].status);
        assert_eq!(status, TaskStatus::ToDo);
        runtime.dispose();
    }

    #[tokio::test]
    async fn status_cycle_keeps_new_status_on_success() {
        let runtime = create_runtime();
        let server = server_with_board();
        server.mock(|when, then| {
            when.method(PATCH).path("/api/tasks/t-2");
            then.status(200).json_body(json!({"message": "ok"}));
        });
        let vm = view_model(&server);
        vm.reload().await;

        assert_eq!(vm.cycle_status("t-2").await.unwrap(), TaskStatus::ToDo);
        assert_eq!(vm.tasks.with_untracked(|list| list[1].status), TaskStatus::ToDo);
        runtime.dispose();
    }

    #[tokio::test]
    async fn invalid_form_never_posts() {
        let runtime = create_runtime();
        let server = server_with_board();
        let vm = view_model(&server);
        vm.open_create();

        let err = vm.save().await.unwrap_err();

        assert_eq!(err.error, "Title is required");
        assert!(vm.form_open.get_untracked());
        assert_eq!(server.hits(POST, "/api/tasks"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_waits_for_confirmation() {
        let runtime = create_runtime();
        let server = server_with_board();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/tasks/t-1");
            then.status(200).json_body(json!({"message": "deleted"}));
        });
        let vm = view_model(&server);
        vm.reload().await;
        let first = vm.tasks.with_untracked(|list| list[0].clone());

        vm.request_delete(first.clone());
        vm.cancel_delete();
        vm.confirm_delete().await.unwrap();
        assert_eq!(server.hits(DELETE, "/api/tasks/t-1"), 0);
        assert_eq!(vm.tasks.with_untracked(Vec::len), 2);

        vm.request_delete(first);
        vm.confirm_delete().await.unwrap();
        assert_eq!(server.hits(DELETE, "/api/tasks/t-1"), 1);
        assert_eq!(vm.tasks.with_untracked(Vec::len), 1);
        assert!(vm.pending_delete.get_untracked().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn details_open_for_a_row_and_close_when_it_is_deleted() {
        let runtime = create_runtime();
        let server = server_with_board();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/tasks/t-1");
            then.status(200).json_body(json!({"message": "deleted"}));
        });
        let vm = view_model(&server);
        vm.reload().await;
        let first = vm.tasks.with_untracked(|list| list[0].clone());

        vm.open_details(first.clone());
        assert_eq!(vm.viewing.get_untracked().map(|t| t.title), Some("Task t-1".to_string()));
        vm.close_details();
        assert!(vm.viewing.get_untracked().is_none());

        vm.open_details(first.clone());
        vm.request_delete(first);
        vm.confirm_delete().await.unwrap();
        assert!(vm.viewing.get_untracked().is_none());
        runtime.dispose();
    }
}
