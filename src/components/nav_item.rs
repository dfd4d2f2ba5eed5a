//! Nav Item Component
//!
//! A single row of the navigation tree.

use leptos::prelude::*;

use crate::store::{store_toggle_expanded, use_sidebar_store, SidebarStateStoreFields};
use crate::tree::{indent_rem, is_current_page, MenuRow};

/// One navigation row. Rows with children toggle their subtree on click;
/// leaf rows are inert.
#[component]
pub fn NavItem(
    row: MenuRow,
    /// Latest (expanded, visible) state of this row
    #[prop(into)]
    state: Signal<(bool, bool)>,
) -> impl IntoView {
    let store = use_sidebar_store();
    let collapsed = move || store.collapsed().get();

    let MenuRow { path, name, icon, depth, has_children, .. } = row;
    let current = is_current_page(&name, depth);
    let nested = depth > 0;
    let expanded = move || state.get().0;
    let visible = move || state.get().1;

    let on_click = move |_| store_toggle_expanded(&store, &path, has_children);

    let row_class = move || {
        let mut c = String::from("nav-row");
        if current { c.push_str(" current"); }
        if collapsed() && depth == 0 { c.push_str(" centered"); }
        c
    };

    view! {
        <div class="nav-row-wrapper" class:nested=nested class:open=visible>
            <button
                class=row_class
                style=move || format!("padding-left: {}rem;", indent_rem(depth, collapsed()))
                on:click=on_click
            >
                <span class="nav-label">
                    <span class=format!("icon icon-{}", icon.key()) class:with-label=move || !collapsed()>
                        {icon.glyph()}
                    </span>
                    <Show when=move || !collapsed()>
                        <span class="nav-name">{name.clone()}</span>
                    </Show>
                </span>
                <Show when=move || has_children && !collapsed()>
                    <span class="chevron">{move || if expanded() { "▾" } else { "▸" }}</span>
                </Show>
            </button>
        </div>
    }
}
