use super::{
    repository::ProjectsRepository,
    utils::{self, ProjectFormValues, StatusFilter},
};
use crate::api::{ApiError, Project, User};
use crate::state::toast::{use_toast, ToastContext};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProjectFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub members: RwSignal<Vec<String>>,
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            members: create_rw_signal(Vec::new()),
        }
    }
}

impl ProjectFormState {
    pub fn values(&self) -> ProjectFormValues {
        ProjectFormValues {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            members: self.members.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.members.set(Vec::new());
    }
}

#[derive(Clone, Copy)]
pub struct ProjectsViewModel {
    pub projects: RwSignal<Vec<Project>>,
    pub team: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    pub filter: RwSignal<StatusFilter>,
    pub form: ProjectFormState,
    pub form_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub saving: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Project>>,
    repo: StoredValue<ProjectsRepository>,
    toasts: ToastContext,
}

impl ProjectsViewModel {
    pub fn new() -> Self {
        Self::with_repository(ProjectsRepository::from_context())
    }

    pub fn with_repository(repo: ProjectsRepository) -> Self {
        let vm = Self {
            projects: create_rw_signal(Vec::new()),
            team: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            filter: create_rw_signal(StatusFilter::default()),
            form: ProjectFormState::default(),
            form_open: create_rw_signal(false),
            form_error: create_rw_signal(None),
            saving: create_rw_signal(false),
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

    pub fn visible_projects(&self) -> Signal<Vec<Project>> {
        let (projects, filter) = (self.projects, self.filter);
        Signal::derive(move || projects.with(|list| utils::filter_projects(list, filter.get())))
    }

    pub async fn reload(&self) {
        match self.repo.get_value().list().await {
            Ok(list) => self.projects.set(list),
            Err(err) => log::error!("loading projects failed: {}", err),
        }
        self.loading.set(false);
    }

    pub async fn load_team(&self) {
        match self.repo.get_value().team().await {
            Ok(team) => self.team.set(team),
            Err(err) => {
                log::warn!("loading team failed: {}", err);
                self.toasts.error(format!("Could not load team: {}", err.error));
            }
        }
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }

    pub async fn create(&self) -> Result<(), ApiError> {
        if self.saving.get_untracked() {
            return Ok(());
        }
        let draft = match self.form.values().to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                let err = ApiError::validation(msg);
                self.form_error.set(Some(err.clone()));
                return Err(err);
            }
        };
        self.saving.set(true);
        let result = self.repo.get_value().create(&draft).await;
        self.saving.set(false);
        match result {
            Ok(()) => {
                self.form_open.set(false);
                self.toasts.success("Project created successfully!");
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                self.toasts.error(format!("Error: {}", err.error));
                self.form_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn toggle_status(&self, project_id: &str) -> Result<(), ApiError> {
        let current = self
            .projects
            .with_untracked(|list| list.iter().find(|p| p.id == project_id).map(|p| p.status))
            .ok_or_else(|| ApiError::validation("Project not found"))?;
        let next = current.toggled();
        match self.repo.get_value().set_status(project_id, next).await {
            Ok(()) => {
                self.projects.update(|list| {
                    if let Some(project) = list.iter_mut().find(|p| p.id == project_id) {
                        project.status = next;
                    }
                });
                self.toasts.success(format!("Project marked as {}", next.as_str()));
                Ok(())
            }
            Err(err) => {
                self.toasts.error("Failed to update status");
                Err(err)
            }
        }
    }

    pub fn request_delete(&self, project: Project) {
        self.pending_delete.set(Some(project));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(project) = self.pending_delete.get_untracked() else {
            return Ok(());
        };
        match self.repo.get_value().delete(&project.id).await {
            Ok(()) => {
                self.projects.update(|list| list.retain(|p| p.id != project.id));
                self.pending_delete.set(None);
                self.toasts.success("Project deleted successfully");
                Ok(())
            }
            Err(err) => {
                self.toasts.error("Error deleting project");
                Err(err)
            }
        }
    }
}
