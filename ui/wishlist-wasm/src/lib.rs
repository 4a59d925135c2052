//! Wishlist WASM Frontend
//!
//! Binds the wishlist screen to the shared form controller. The page keeps
//! its markup; this crate only reads inputs, calls the API and writes the
//! resulting view back.

pub mod api;
pub mod dom;
pub mod events;
pub mod form;
pub mod state;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wl_client::{DEFAULT_BASE_PATH, Endpoints, WishlistClient};
use wl_form::Controller;

/// Attribute naming the resource base path, e.g. `data-wishlist-base-path="/api/wishlists"`.
const BASE_PATH_ATTR: &str = "data-wishlist-base-path";

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let base_path = configured_base_path()?;
    web_sys::console::log_1(&JsValue::from_str(&format!("wishlist api base path: {base_path}")));

    let client = WishlistClient::new(api::FetchTransport::new(""), Endpoints::new(&base_path));
    events::bind_events(&els, Rc::new(Controller::new(client)))
}

fn configured_base_path() -> Result<String, JsValue> {
    let doc = dom::document()?;
    let selector = format!("[{BASE_PATH_ATTR}]");
    let configured = doc
        .query_selector(&selector)?
        .and_then(|el| el.get_attribute(BASE_PATH_ATTR))
        .filter(|v| !v.trim().is_empty());
    Ok(configured.unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()))
}
