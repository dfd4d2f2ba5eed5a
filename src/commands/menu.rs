//! Menu Commands
//!
//! Loading the navigation tree from the menu service.

use web_sys::AbortSignal;

use super::get_json;
use crate::config::SidebarConfig;
use crate::error::MenuLoadError;
use crate::models::{resolve_menu, MenuNode, NavNode};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Headers sent with every menu request
pub fn menu_headers(config: &SidebarConfig) -> [(&'static str, &str); 2] {
    [("accept", "*/*"), (API_KEY_HEADER, config.api_key.as_str())]
}

pub async fn fetch_menu(
    config: &SidebarConfig,
    signal: Option<&AbortSignal>,
) -> Result<Vec<MenuNode>, MenuLoadError> {
    get_json(&config.menu_url(), &menu_headers(config), signal).await
}

/// Fetch the menu and resolve its icons
pub async fn load_menu(
    config: &SidebarConfig,
    signal: Option<&AbortSignal>,
) -> Result<Vec<NavNode>, MenuLoadError> {
    fetch_menu(config, signal).await.map(resolve_menu)
}
