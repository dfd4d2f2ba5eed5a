//! UI Components
//!
//! Leptos components making up the sidebar layout.

mod nav_item;
mod sidebar;
mod header_bar;
mod content_panel;

pub use nav_item::NavItem;
pub use sidebar::Sidebar;
pub use header_bar::HeaderBar;
pub use content_panel::ContentPanel;
