//! `fetch`-backed transport.
//!
//! Requests go to the page's own origin unless an origin is given.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};
use wl_client::{ApiRequest, ApiResponse, Transport, TransportError};

use crate::dom;

pub struct FetchTransport {
    origin: String,
}

impl FetchTransport {
    /// Empty origin means same-origin relative URLs.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

fn js_err(context: &str, e: JsValue) -> TransportError {
    TransportError(format!("{context}: {e:?}"))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url(&self.origin);

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());

        let headers = Headers::new().map_err(|e| js_err("headers", e))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| js_err("headers", e))?;
        opts.set_headers(&headers);

        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(&body.to_string()));
        }

        let req = Request::new_with_str_and_init(&url, &opts).map_err(|e| js_err("request", e))?;

        let window = dom::window().map_err(|e| js_err("window", e))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| js_err("fetch error", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| TransportError("response is not a Response".to_string()))?;

        let text = JsFuture::from(resp.text().map_err(|e| js_err("text", e))?)
            .await
            .map_err(|e| js_err("text error", e))?;

        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
