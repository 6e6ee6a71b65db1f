#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(any(target_arch = "wasm32", test))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(any(target_arch = "wasm32", test))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = app_lib::config::AppConfig::load();
    app_lib::logging::init(&config.log_level);
    tracing::info!(commit = app_lib::build_info::git_commit_hash(), "portal starting");
    mount_to_body(App);
}

// The shared modules also build natively under `cfg(test)` so their unit
// tests run without a browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
