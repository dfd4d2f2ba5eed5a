//! Menu Sidebar Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod error;
mod icons;
mod models;
mod store;
mod tree;

use app::App;
use config::SidebarConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SidebarConfig::from_document().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[CONFIG] {}; using defaults", e).into());
        SidebarConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
