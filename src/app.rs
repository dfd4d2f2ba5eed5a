//! Menu Sidebar App
//!
//! Sidebar on the left, header bar and content panel on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use send_wrapper::SendWrapper;

use crate::commands;
use crate::components::{ContentPanel, HeaderBar, Sidebar};
use crate::config::SidebarConfig;
use crate::error::{js_to_string, MenuLoadError};
use crate::store::{store_apply_menu_result, SidebarState};

#[component]
pub fn App(config: SidebarConfig) -> impl IntoView {
    let store = Store::new(SidebarState::default());
    provide_context(store);
    provide_context(config.clone());

    // Load the menu once on mount; the request is aborted on unmount
    Effect::new(move |_| {
        let controller = match web_sys::AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                web_sys::console::error_1(&format!("[MENU] AbortController unavailable: {}", js_to_string(&e)).into());
                None
            }
        };
        let signal = controller.as_ref().map(|c| c.signal());
        let config = config.clone();

        web_sys::console::log_1(&format!("[MENU] Loading menu from {}", config.menu_url()).into());
        spawn_local(async move {
            let result = commands::load_menu(&config, signal.as_ref()).await;
            match store_apply_menu_result(&store, result) {
                Ok(count) => {
                    web_sys::console::log_1(&format!("[MENU] Loaded {} top-level entries", count).into());
                }
                Err(MenuLoadError::Aborted) => {
                    web_sys::console::debug_1(&"[MENU] Load aborted".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MENU] Error fetching item menu: {}", e).into());
                }
            }
        });

        let controller = SendWrapper::new(controller);
        on_cleanup(move || {
            if let Some(controller) = controller.take() {
                controller.abort();
            }
        });
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="main-column">
                <HeaderBar />
                <ContentPanel />
            </div>
        </div>
    }
}
