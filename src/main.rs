#![allow(warnings)]
//! Goal List Frontend Entry Point

mod models;
mod goals;
mod config;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("mounting goal list");
    mount_to_body(App);
}
