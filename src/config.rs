//! Sidebar Configuration
//!
//! Read from the JSON block `<script id="sidebar-config">` in `index.html`.

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "sidebar-config";
const DEFAULT_BASE_URL: &str = "https://localhost:7288";
const DEFAULT_USER_NAME: &str = "Tom Cook";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Menu service root, without the `/itemMenu` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `X-API-KEY`
    pub api_key: String,
    /// Label shown in the header bar
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            user_name: default_user_name(),
        }
    }
}

impl SidebarConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load from the config element of the current document
    pub fn from_document() -> Result<Self, ConfigError> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing)?;
        Self::from_json(&json)
    }

    pub fn menu_url(&self) -> String {
        format!("{}/itemMenu", self.base_url.trim_end_matches('/'))
    }
}
