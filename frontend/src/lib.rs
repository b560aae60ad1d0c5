//! WASM entry point for the Infinitum site.
//!
//! The server renders the page; this crate hydrates it so the header's scroll
//! listener and mobile menu become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered body.
///
/// Installs browser console logging and the panic hook first, so failures
/// during hydration are visible in devtools.
pub fn hydrate() {
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::component);
}

/// Debug builds log everything to the console; release builds only warnings.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}
