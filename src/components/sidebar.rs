//! Sidebar Component
//!
//! Hamburger toggle and the navigation tree.

use leptos::prelude::*;

use crate::components::NavItem;
use crate::store::{store_toggle_collapsed, use_sidebar_store, SidebarStateStoreFields};
use crate::tree::flatten_menu;

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_sidebar_store();

    let rows = Memo::new(move |_| {
        flatten_menu(&store.menu().read(), &store.expanded().read())
    });

    let sidebar_class = move || {
        if store.collapsed().get() { "sidebar collapsed" } else { "sidebar" }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <button class="hamburger-btn" title="Toggle sidebar" on:click=move |_| store_toggle_collapsed(&store)>
                    "☰"
                </button>
            </div>

            <nav class="sidebar-nav">
                <For
                    each=move || rows.get()
                    key=|row| row.key.clone()
                    children=move |row| {
                        let key = row.key.clone();
                        let state = Signal::derive(move || {
                            rows.with(|rs| {
                                rs.iter()
                                    .find(|r| r.key == key)
                                    .map(|r| (r.expanded, r.visible))
                                    .unwrap_or_default()
                            })
                        });
                        view! { <NavItem row=row state=state /> }
                    }
                />
            </nav>
        </aside>
    }
}
