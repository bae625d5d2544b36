use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api::{Role, User},
    utils::storage,
};

pub const SESSION_KEY: &str = "anchorz.session";

/// Refresh this many seconds before the token actually expires.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
}

impl IdentityUser {
    fn metadata_str(&self, key: &str) -> Option<String> {
        self.user_metadata
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Best-effort application user when the profile row is unavailable.
    pub fn to_fallback_user(&self) -> User {
        User {
            id: self.id.clone(),
            full_name: self
                .metadata_str("full_name")
                .or_else(|| self.metadata_str("name"))
                .unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            role: self
                .metadata_str("role")
                .map(Role::from)
                .unwrap_or_default(),
            avatar_url: self.metadata_str("avatar_url"),
        }
    }

    /// Profile row values win; identity fills the gaps.
    pub fn merge_profile(&self, profile: User) -> User {
        let fallback = self.to_fallback_user();
        User {
            id: self.id.clone(),
            full_name: if profile.full_name.trim().is_empty() {
                fallback.full_name
            } else {
                profile.full_name
            },
            email: if profile.email.is_empty() {
                fallback.email
            } else {
                profile.email
            },
            role: profile.role,
            avatar_url: profile.avatar_url.or(fallback.avatar_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentitySession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: IdentityUser,
}

impl IdentitySession {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => now_secs + EXPIRY_MARGIN_SECS >= expires_at,
            None => false,
        }
    }
}

pub fn load_session() -> Option<IdentitySession> {
    storage::get_json(SESSION_KEY)
}

pub fn save_session(session: &IdentitySession) -> Result<(), String> {
    storage::set_json(SESSION_KEY, session)
}

pub fn clear_session() {
    storage::remove_item(SESSION_KEY);
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub user_metadata: Value,
}

/// Reads the payload of a JWT without verifying it.
pub fn decode_claims(token: &str) -> Option<JwtClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Outcome of an OAuth redirect, read from the URL fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum OAuthCallback {
    Tokens {
        access_token: String,
        refresh_token: Option<String>,
        expires_at: Option<i64>,
    },
    Error(String),
}

fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced)
        .decode_utf8_lossy()
        .into_owned()
}

pub fn parse_callback_fragment(fragment: &str, now_secs: i64) -> Option<OAuthCallback> {
    let fragment = fragment.trim_start_matches('#');
    if fragment.is_empty() {
        return None;
    }
    let pairs: Vec<(String, String)> = fragment
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.to_string(), decode_component(value)))
        })
        .collect();
    let get = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    if let Some(description) = get("error_description").or_else(|| get("error")) {
        return Some(OAuthCallback::Error(description));
    }
    let access_token = get("access_token")?;
    let expires_at = get("expires_at")
        .and_then(|v| v.parse().ok())
        .or_else(|| {
            get("expires_in")
                .and_then(|v| v.parse::<i64>().ok())
                .map(|secs| now_secs + secs)
        });
    Some(OAuthCallback::Tokens {
        access_token,
        refresh_token: get("refresh_token"),
        expires_at,
    })
}
