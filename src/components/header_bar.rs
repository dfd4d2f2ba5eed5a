//! Header Bar Component
//!
//! Search box, notification button and user label.

use leptos::prelude::*;

use crate::config::SidebarConfig;
use crate::store::{use_sidebar_store, SidebarStateStoreFields};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_sidebar_store();
    let user_name = use_context::<SidebarConfig>()
        .map(|c| c.user_name)
        .unwrap_or_default();

    view! {
        <header class="header-bar">
            <div class="search-wrapper">
                <span class="search-icon">"🔍"</span>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search"
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| store.search_query().set(event_target_value(&ev))
                />
            </div>
            <div class="header-actions">
                <button class="bell-btn" title="Notifications">"🔔"</button>
                <button class="user-btn">
                    <span class="user-name">{user_name}</span>
                </button>
            </div>
        </header>
    }
}
