pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod services;

#[cfg(feature = "ssr")]
pub mod error;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
