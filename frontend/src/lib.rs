mod api;
mod components;
pub mod config;
mod geo;
mod identity;
mod pages;
mod router;
mod state;
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Anchorz PM frontend (wasm)");

    // Runtime config comes from ./config.json; window.__ANCHORZ_ENV wins when present.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
