//! Thin key/value persistence over `localStorage`.
//!
//! Native builds (host tests, SSR rendering) have no browser, so they keep the
//! same API over a thread-local map.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        ITEMS.with(|items| items.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
    }
}

#[cfg(target_arch = "wasm32")]
pub use backend::{local_storage, window};

pub fn get_item(key: &str) -> Option<String> {
    backend::get(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    backend::set(key, value)
}

pub fn remove_item(key: &str) {
    backend::remove(key)
}

pub fn get_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable stored value for {}: {}", key, err);
            remove_item(key);
            None
        }
    }
}

pub fn set_json<T: serde::Serialize>(key: &str, value: &T) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    set_item(key, &raw)
}
