//! Error Types
//!
//! Failures surfaced by the menu loader and the configuration reader.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why the navigation menu could not be loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuLoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("menu service responded with status {0}")]
    Status(u16),
    #[error("malformed menu payload: {0}")]
    Malformed(String),
    #[error("request aborted")]
    Aborted,
}

impl MenuLoadError {
    /// Map a rejected `fetch` promise; aborts arrive as an `AbortError` DOMException.
    pub fn from_js(err: JsValue) -> Self {
        if let Some(exc) = err.dyn_ref::<web_sys::DomException>() {
            if exc.name() == "AbortError" {
                return Self::Aborted;
            }
            return Self::Network(exc.message());
        }
        Self::Network(js_to_string(&err))
    }
}

/// Why the sidebar configuration could not be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no #sidebar-config element in the document")]
    Missing,
    #[error("invalid sidebar config: {0}")]
    Invalid(String),
}

/// Best-effort string form of a JS error value
pub fn js_to_string(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
