use super::{repository::ProjectDetailsRepository, utils};
use crate::api::{ApiError, Project, Task, TaskStatus, User};
use crate::pages::tasks::{
    utils::{self as task_utils, TaskFormValues},
    view_model::{set_status_optimistic, TaskFormState},
};
use crate::state::toast::{use_toast, ToastContext};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProjectDetailsViewModel {
    pub project_id: StoredValue<String>,
    pub project: RwSignal<Option<Project>>,
    pub tasks: RwSignal<Vec<Task>>,
    pub team: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub task_form: TaskFormState,
    pub task_form_open: RwSignal<bool>,
    pub task_form_error: RwSignal<Option<ApiError>>,
    /// `None` while adding, the task id while editing.
    pub editing: RwSignal<Option<String>>,
    pub viewing: RwSignal<Option<Task>>,
    pub member_form_open: RwSignal<bool>,
    pub selected_member: RwSignal<String>,
    pub pending_delete: RwSignal<Option<Task>>,
    repo: StoredValue<ProjectDetailsRepository>,
    toasts: ToastContext,
}

impl ProjectDetailsViewModel {
    pub fn new(project_id: String) -> Self {
        Self::with_repository(project_id, ProjectDetailsRepository::from_context())
    }

    pub fn with_repository(project_id: String, repo: ProjectDetailsRepository) -> Self {
        let vm = Self {
            project_id: store_value(project_id),
            project: create_rw_signal(None),
            tasks: create_rw_signal(Vec::new()),
            team: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            load_error: create_rw_signal(None),
            task_form: TaskFormState::default(),
            task_form_open: create_rw_signal(false),
            task_form_error: create_rw_signal(None),
            editing: create_rw_signal(None),
            viewing: create_rw_signal(None),
            member_form_open: create_rw_signal(false),
            selected_member: create_rw_signal(String::new()),
            pending_delete: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            futures::join!(vm.reload(), vm.load_team());
        });
        vm
    }

    pub fn members(&self) -> Signal<Vec<User>> {
        let project = self.project;
        Signal::derive(move || project.with(|p| p.as_ref().map(|p| p.members.clone()).unwrap_or_default()))
    }

    pub fn addable_members(&self) -> Signal<Vec<User>> {
        let (team, members) = (self.team, self.members());
        Signal::derive(move || team.with(|team| members.with(|m| utils::addable_members(team, m))))
    }

    pub async fn reload(&self) {
        let id = self.project_id.get_value();
        match self.repo.get_value().load(&id).await {
            Ok((project, tasks)) => {
                self.project.set(Some(project));
                self.tasks.set(tasks);
                self.load_error.set(None);
            }
            Err(err) => {
                log::error!("loading project {} failed: {}", id, err);
                self.load_error.set(Some(err));
            }
        }
        self.loading.set(false);
    }

    pub async fn load_team(&self) {
        match self.repo.get_value().team().await {
            Ok(team) => self.team.set(team),
            Err(err) => log::warn!("loading team failed: {}", err),
        }
    }

    /// Moves a card one column along; the board reverts if the save fails.
    pub async fn move_task(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        let next = self
            .tasks
            .with_untracked(|list| list.iter().find(|t| t.id == task_id).map(|t| t.status.next()))
            .ok_or_else(|| ApiError::validation("Task not found"))?;
        let repo = self.repo.get_value().tasks();
        set_status_optimistic(&repo, self.tasks, task_id, next)
            .await
            .map(|()| next)
    }

    pub fn open_task_form(&self) {
        self.task_form.load(TaskFormValues {
            project: self.project_id.get_value(),
            ..TaskFormValues::default()
        });
        self.task_form_error.set(None);
        self.editing.set(None);
        self.task_form_open.set(true);
    }

    pub fn open_edit_task(&self, task: &Task) {
        self.task_form.load(TaskFormValues {
            project: task.project_id.clone().unwrap_or_else(|| self.project_id.get_value()),
            ..TaskFormValues::from_task(task)
        });
        self.task_form_error.set(None);
        self.editing.set(Some(task.id.clone()));
        self.task_form_open.set(true);
    }

    pub fn close_task_form(&self) {
        self.task_form_open.set(false);
        self.editing.set(None);
    }

    pub async fn save_task(&self) -> Result<(), ApiError> {
        match self.editing.get_untracked() {
            Some(task_id) => self.update_task(&task_id).await,
            None => self.create_task().await,
        }
    }

    /// Saves the edit form and folds the change into the board row.
    pub async fn update_task(&self, task_id: &str) -> Result<(), ApiError> {
        let mut values = self.task_form.values();
        if values.project.is_empty() {
            values.project = self.project_id.get_value();
        }
        let patch = match values.to_patch() {
            Ok(patch) => patch,
            Err(msg) => {
                let err = ApiError::validation(msg);
                self.task_form_error.set(Some(err.clone()));
                return Err(err);
            }
        };
        match self.repo.get_value().tasks().update(task_id, &patch).await {
            Ok(()) => {
                let projects: Vec<Project> = self.project.get_untracked().into_iter().collect();
                let members = self.members().get_untracked();
                self.tasks.update(|list| {
                    if let Some(task) = list.iter_mut().find(|t| t.id == task_id) {
                        task_utils::apply_patch(task, &patch, &projects, &members);
                    }
                });
                self.close_task_form();
                self.toasts.success("Task updated successfully!");
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.message_or("Error updating task"));
                self.task_form_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn create_task(&self) -> Result<(), ApiError> {
        let mut values = self.task_form.values();
        values.project = self.project_id.get_value();
        let draft = match values.to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                let err = ApiError::validation(msg);
                self.task_form_error.set(Some(err.clone()));
                return Err(err);
            }
        };
        match self.repo.get_value().tasks().create(&draft).await {
            Ok(_) => {
                self.close_task_form();
                self.toasts.success("Task created successfully!");
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.message_or("Error creating task"));
                self.task_form_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn add_member(&self) -> Result<(), ApiError> {
        let user_id = self.selected_member.get_untracked();
        if user_id.is_empty() {
            return Err(ApiError::validation("Select a member to add"));
        }
        let project_id = self.project_id.get_value();
        match self.repo.get_value().add_member(&project_id, &user_id).await {
            Ok(()) => {
                self.member_form_open.set(false);
                self.selected_member.set(String::new());
                self.toasts.success("Member added successfully!");
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                self.toasts.error("Error adding member");
                Err(err)
            }
        }
    }

    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(task) = self.pending_delete.get_untracked() else {
            return Ok(());
        };
        match self.repo.get_value().tasks().delete(&task.id).await {
            Ok(()) => {
                self.tasks.update(|list| list.retain(|t| t.id != task.id));
                self.pending_delete.set(None);
                if self.viewing.with_untracked(|v| v.as_ref().is_some_and(|v| v.id == task.id)) {
                    self.viewing.set(None);
                }
                self.toasts.success("Task deleted successfully");
                Ok(())
            }
            Err(err) => {
                self.toasts.error("Error deleting task");
                Err(err)
            }
        }
    }
}
