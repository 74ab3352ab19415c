//! Task Service Bindings
//!
//! HTTP wrappers over `window.fetch`, organized by resource.

mod task;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Re-export all public items
pub use task::*;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Send one request and resolve to the raw response body.
///
/// The status code is not inspected: callers decode whatever comes back.
async fn fetch_text(method: &str, url: &str, json_body: Option<&str>) -> Result<String, String> {
    web_sys::console::log_1(&format!("[API] {} {}", method, url).into());

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or("no global window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| format!("{} {}: body is not text", method, url))
}
