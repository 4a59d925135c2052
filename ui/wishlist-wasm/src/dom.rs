//! DOM element bindings.
//!
//! All fields are resolved once at startup. Element ids are the page's
//! contract and must not change.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};
use wl_form::Action;

// ── Helpers ──

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    by_id(doc, id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

// ── Elements struct ──

/// Every element the wishlist screen touches.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Wishlist
    pub wishlist_id: HtmlInputElement,
    pub wishlist_name: HtmlInputElement,
    pub owner_id: HtmlInputElement,

    // Item
    pub item_id: HtmlInputElement,
    pub product_name: HtmlInputElement,
    pub product_id: HtmlInputElement,
    pub item_quantity: HtmlInputElement,

    // Output
    pub flash_message: Element,
    pub search_results: Element,
    pub search_item_results: Element,

    pub buttons: Vec<(Action, HtmlElement)>,
}

macro_rules! get_el {
    ($doc:expr, $id:expr) => {
        by_id($doc, $id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($doc:expr, $id:expr) => {
        by_id_typed::<HtmlInputElement>($doc, $id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    ///
    /// The owner field is `owner_id` on one screen and `wishlist_owner_id`
    /// on the other; whichever exists is bound.
    pub fn bind() -> Result<Elements, JsValue> {
        let doc = document()?;

        let owner_id = by_id_typed::<HtmlInputElement>(&doc, "owner_id")
            .or_else(|| by_id_typed::<HtmlInputElement>(&doc, "wishlist_owner_id"))
            .ok_or_else(|| JsValue::from_str("missing input #owner_id"))?;

        let mut buttons = Vec::with_capacity(Action::ALL.len());
        for action in Action::ALL {
            let id = action.button_id();
            let button = by_id_typed::<HtmlElement>(&doc, &id)
                .ok_or_else(|| JsValue::from_str(&format!("missing button #{id}")))?;
            buttons.push((action, button));
        }

        Ok(Elements {
            wishlist_id: get_input!(&doc, "wishlist_id"),
            wishlist_name: get_input!(&doc, "wishlist_name"),
            owner_id,

            item_id: get_input!(&doc, "item_id"),
            product_name: get_input!(&doc, "product_name"),
            product_id: get_input!(&doc, "product_id"),
            item_quantity: get_input!(&doc, "item_quantity"),

            flash_message: get_el!(&doc, "flash_message"),
            search_results: get_el!(&doc, "search_results"),
            search_item_results: get_el!(&doc, "search_item_results"),

            buttons,
        })
    }
}
