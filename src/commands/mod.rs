//! Menu Service Bindings
//!
//! Browser `fetch` wrapper plus the endpoints the sidebar talks to.

mod menu;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

use crate::error::MenuLoadError;

pub use menu::*;

/// GET `url` with the given headers and decode the JSON body.
/// The request is cancelled when `signal` aborts.
async fn get_json<T: DeserializeOwned>(
    url: &str,
    headers: &[(&str, &str)],
    signal: Option<&AbortSignal>,
) -> Result<T, MenuLoadError> {
    let window = web_sys::window().ok_or_else(|| MenuLoadError::Network("no window".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    init.set_signal(signal);

    let request = Request::new_with_str_and_init(url, &init).map_err(MenuLoadError::from_js)?;
    for (name, value) in headers {
        request.headers().set(name, value).map_err(MenuLoadError::from_js)?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(MenuLoadError::from_js)?
        .dyn_into()
        .map_err(MenuLoadError::from_js)?;

    if !response.ok() {
        return Err(MenuLoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(MenuLoadError::from_js)?)
        .await
        .map_err(|e| match MenuLoadError::from_js(e) {
            MenuLoadError::Aborted => MenuLoadError::Aborted,
            other => MenuLoadError::Malformed(other.to_string()),
        })?;

    serde_wasm_bindgen::from_value(body).map_err(|e| MenuLoadError::Malformed(e.to_string()))
}
