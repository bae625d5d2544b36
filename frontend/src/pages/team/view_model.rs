use super::{repository::TeamRepository, utils::invite_request};
use crate::api::{ApiError, InviteRole, User};
use crate::state::toast::{use_toast, ToastContext};
use leptos::*;

#[derive(Clone, Copy)]
pub struct TeamViewModel {
    pub members: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    pub invite_open: RwSignal<bool>,
    pub invite_email: RwSignal<String>,
    pub invite_role: RwSignal<InviteRole>,
    pub sending: RwSignal<bool>,
    pub pending_remove: RwSignal<Option<User>>,
    repo: StoredValue<TeamRepository>,
    toasts: ToastContext,
}

impl TeamViewModel {
    pub fn new() -> Self {
        Self::with_repository(TeamRepository::from_context())
    }

    pub fn with_repository(repo: TeamRepository) -> Self {
        let vm = Self {
            members: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            invite_open: create_rw_signal(false),
            invite_email: create_rw_signal(String::new()),
            invite_role: create_rw_signal(InviteRole::Member),
            sending: create_rw_signal(false),
            pending_remove: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            vm.reload().await;
        });
        vm
    }

    pub async fn reload(&self) {
        match self.repo.get_value().members().await {
            Ok(members) => self.members.set(members),
            Err(err) => log::error!("loading team failed: {}", err),
        }
        self.loading.set(false);
    }

    pub fn open_invite(&self) {
        self.invite_email.set(String::new());
        self.invite_role.set(InviteRole::Member);
        self.invite_open.set(true);
    }

    pub async fn send_invite(&self) -> Result<(), ApiError> {
        if self.sending.get_untracked() {
            return Ok(());
        }
        let request = invite_request(&self.invite_email.get_untracked(), self.invite_role.get_untracked())
            .map_err(|message| {
                self.toasts.error(message.clone());
                ApiError::validation(message)
            })?;
        self.sending.set(true);
        let result = self.repo.get_value().invite(&request).await;
        self.sending.set(false);
        match result {
            Ok(_) => {
                self.invite_open.set(false);
                self.invite_email.set(String::new());
                self.toasts.success("Invitation sent successfully!");
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.message_or("Error sending invite"));
                Err(err)
            }
        }
    }

    pub async fn confirm_remove(&self) -> Result<(), ApiError> {
        let Some(member) = self.pending_remove.get_untracked() else {
            return Ok(());
        };
        match self.repo.get_value().remove(&member.id).await {
            Ok(()) => {
                self.pending_remove.set(None);
                self.toasts.success("Member removed successfully");
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.message_or("Error removing member"));
                Err(err)
            }
        }
    }
}
