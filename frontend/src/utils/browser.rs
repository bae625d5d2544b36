//! Window-level helpers. Outside the browser they degrade to no-ops so that
//! components can be rendered and state functions exercised in host tests.

#[cfg(target_arch = "wasm32")]
mod imp {
    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn print() {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub fn pathname() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    pub fn hash() -> Option<String> {
        web_sys::window()?.location().hash().ok()
    }

    pub fn clear_hash() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }

    pub fn assign(href: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn alert(message: &str) {
        log::warn!("alert: {}", message);
    }

    pub fn print() {}

    pub fn origin() -> Option<String> {
        None
    }

    pub fn pathname() -> Option<String> {
        None
    }

    pub fn hash() -> Option<String> {
        None
    }

    pub fn clear_hash() {}

    pub fn assign(href: &str) {
        log::debug!("navigation to {} skipped outside the browser", href);
    }
}

pub use imp::*;
