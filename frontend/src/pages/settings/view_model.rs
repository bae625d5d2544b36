use super::repository::SettingsRepository;
use crate::api::{ApiError, User};
use crate::state::toast::{use_toast, ToastContext};
use leptos::*;

/// Trimmed full name, or the message shown when it is blank.
pub fn validate_full_name(raw: &str) -> Result<String, ApiError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ApiError::validation("Full name is required"))
    } else {
        Ok(name.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    repo: StoredValue<SettingsRepository>,
    toasts: ToastContext,
}

impl ProfileViewModel {
    pub fn new(user: Option<&User>) -> Self {
        Self::with_repository(user, SettingsRepository::from_context())
    }

    pub fn with_repository(user: Option<&User>, repo: SettingsRepository) -> Self {
        Self {
            full_name: create_rw_signal(
                user.map(|u| u.full_name.clone()).unwrap_or_default(),
            ),
            email: create_rw_signal(user.map(|u| u.email.clone()).unwrap_or_default()),
            saving: create_rw_signal(false),
            error: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        }
    }

    /// Saves the profile. `Ok` means the session user should be reloaded.
    pub async fn save(&self) -> Result<(), ApiError> {
        if self.saving.get_untracked() {
            return Err(ApiError::validation("Already saving"));
        }
        let name = match validate_full_name(&self.full_name.get_untracked()) {
            Ok(name) => name,
            Err(err) => {
                self.error.set(Some(err.clone()));
                return Err(err);
            }
        };
        self.error.set(None);
        self.saving.set(true);
        let result = self.repo.get_value().update_profile(&name).await;
        self.saving.set(false);
        match result {
            Ok(_) => {
                self.full_name.set(name);
                self.toasts.success("Profile updated successfully!");
                Ok(())
            }
            Err(err) => {
                log::warn!("profile update failed: {}", err);
                self.toasts.error(err.message_or("Error updating profile"));
                self.error.set(Some(err.clone()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_full_name;

    #[test]
    fn full_name_is_trimmed_and_required() {
        assert_eq!(validate_full_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");
        let err = validate_full_name("   ").unwrap_err();
        assert_eq!(err.error, "Full name is required");
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
