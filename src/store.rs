//! Sidebar State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::MenuLoadError;
use crate::models::NavNode;
use crate::tree::ExpansionState;

/// State of one mounted sidebar, dropped on unmount
#[derive(Clone, Debug, Default, Store)]
pub struct SidebarState {
    /// Navigation tree, empty until the menu service answers
    pub menu: Vec<NavNode>,
    /// Paths of expanded nodes
    pub expanded: ExpansionState,
    /// Narrow icon-only layout
    pub collapsed: bool,
    /// Bound to the header search box; not applied to the menu
    pub search_query: String,
}

pub type SidebarStore = Store<SidebarState>;

/// Get the sidebar store from context
pub fn use_sidebar_store() -> SidebarStore {
    expect_context::<SidebarStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install the loaded menu. Returns false if the store was already disposed.
pub fn store_set_menu(store: &SidebarStore, menu: Vec<NavNode>) -> bool {
    store.menu().try_update(|m| *m = menu).is_some()
}

/// Install a successful load; failures leave the menu untouched.
/// Returns the number of top-level entries installed.
pub fn store_apply_menu_result(
    store: &SidebarStore,
    result: Result<Vec<NavNode>, MenuLoadError>,
) -> Result<usize, MenuLoadError> {
    let menu = result?;
    let count = menu.len();
    if store_set_menu(store, menu) {
        Ok(count)
    } else {
        Err(MenuLoadError::Aborted)
    }
}

/// Expand or collapse the node at `path`; no-op for leaves
pub fn store_toggle_expanded(store: &SidebarStore, path: &str, has_children: bool) {
    store.expanded().update(|e| {
        e.toggle_row(path, has_children);
    });
}

pub fn store_toggle_collapsed(store: &SidebarStore) {
    store.collapsed().update(|c| *c = !*c);
}
