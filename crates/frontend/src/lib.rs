//! Shop admin: Leptos CSR back office for the shop REST API.
//!
//! `domain` holds the catalog and sales pages, `system` holds sign-in,
//! users and roles, `dashboards` holds analytics, `shared` holds the REST
//! client and reusable widgets.

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // `log` macros go to the browser console
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
