use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "IDENTITY_URL")]
    pub identity_url: Option<String>,
    #[serde(default, alias = "IDENTITY_ANON_KEY")]
    pub identity_anon_key: Option<String>,
}

/// Fully resolved settings the API and identity clients are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub identity_url: String,
    pub identity_anon_key: String,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RuntimeConfig {
    /// Later layers only fill in what earlier ones left unset.
    pub fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            identity_url: self.identity_url.or(fallback.identity_url),
            identity_anon_key: self.identity_anon_key.or(fallback.identity_anon_key),
        }
    }

    pub fn resolve(&self, origin: Option<&str>) -> ResolvedConfig {
        let api_base_url = non_empty(&self.api_base_url)
            .map(trim_base)
            .or_else(|| origin.map(trim_base))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let identity_url = non_empty(&self.identity_url)
            .map(trim_base)
            .unwrap_or_else(|| api_base_url.clone());
        ResolvedConfig {
            api_base_url,
            identity_url,
            identity_anon_key: non_empty(&self.identity_anon_key)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// `window.__ANCHORZ_ENV` (env.js) wins over `window.__ANCHORZ_CONFIG`.
    pub fn snapshot(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            identity_url: read_key(&obj, &["IDENTITY_URL", "identity_url"]),
            identity_anon_key: read_key(&obj, &["IDENTITY_ANON_KEY", "identity_anon_key"]),
        })
    }

    pub async fn fetch_config_json(origin: &str) -> Option<RuntimeConfig> {
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> ResolvedConfig {
    let origin = crate::utils::browser::origin();
    let mut config = RuntimeConfig::default();
    for name in ["__ANCHORZ_ENV", "__ANCHORZ_CONFIG"] {
        if let Some(layer) = globals::snapshot(name) {
            config = config.merge(layer);
        }
    }
    if config.api_base_url.is_none() || config.identity_url.is_none() {
        if let Some(origin) = origin.as_deref() {
            if let Some(file) = globals::fetch_config_json(origin).await {
                config = config.merge(file);
            }
        }
    }
    config.resolve(origin.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> ResolvedConfig {
    RuntimeConfig::default().resolve(None)
}

pub async fn await_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let loaded = load_runtime_config().await;
    if loaded.identity_anon_key.is_empty() {
        log::warn!("identity anon key is not configured; sign-in will fail");
    }
    RESOLVED.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

pub async fn init() {
    let config = await_config().await;
    log::info!("runtime config ready (api: {})", config.api_base_url);
}
