use crate::identity::LoginRequest;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

pub fn build_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.trim().to_lowercase(),
        password: password.to_string(),
    }
}

/// Where the identity provider sends the browser back after Google sign-in.
pub fn oauth_redirect(origin: Option<&str>) -> String {
    match origin {
        Some(origin) => format!("{}/", origin.trim_end_matches('/')),
        None => "/".to_string(),
    }
}
