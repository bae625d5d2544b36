use crate::api::{InviteRequest, InviteRole, User};

/// Admins may remove anyone but themselves.
pub fn can_remove(member: &User, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|viewer| viewer.is_admin() && viewer.id != member.id)
}

pub fn invite_request(email: &str, role: InviteRole) -> Result<InviteRequest, String> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if !valid {
        return Err("Please enter a valid email address".into());
    }
    Ok(InviteRequest {
        email: email.to_lowercase(),
        role,
    })
}

pub fn role_class(member: &User) -> &'static str {
    if member.is_admin() {
        "bg-role-admin-bg text-role-admin-text"
    } else {
        "bg-status-success-bg text-status-success-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;

    fn user(id: &str, role: Role) -> User {
        User { id: id.into(), role, ..User::default() }
    }

    #[test]
    fn admins_never_remove_themselves() {
        let admin = user("a", Role::Admin);
        let member = user("m", Role::Member);
        assert!(can_remove(&member, Some(&admin)));
        assert!(!can_remove(&admin, Some(&admin)));
        assert!(!can_remove(&admin, Some(&member)));
        assert!(!can_remove(&member, None));
    }

    #[test]
    fn invite_needs_plausible_email() {
        assert!(invite_request("nobody", InviteRole::Member).is_err());
        assert!(invite_request("a@b", InviteRole::Member).is_err());
        let request = invite_request("  New.Hire@Digianchorz.com ", InviteRole::Admin).unwrap();
        assert_eq!(request.email, "new.hire@digianchorz.com");
        assert_eq!(request.role, InviteRole::Admin);
    }
}
