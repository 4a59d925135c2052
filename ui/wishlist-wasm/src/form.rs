//! Moves a [`FormView`] in and out of the page.

use wl_form::{FormView, ResultTable};

use crate::dom::{self, Elements};
use crate::state;

/// Current inputs layered over the last rendered view.
pub fn read(els: &Elements) -> FormView {
    FormView {
        wishlist_id: dom::get_input_value(&els.wishlist_id),
        wishlist_name: dom::get_input_value(&els.wishlist_name),
        owner_id: dom::get_input_value(&els.owner_id),
        item_id: dom::get_input_value(&els.item_id),
        product_name: dom::get_input_value(&els.product_name),
        product_id: dom::get_input_value(&els.product_id),
        item_quantity: dom::get_input_value(&els.item_quantity),
        ..state::view()
    }
}

pub fn apply(els: &Elements, view: &FormView) {
    dom::set_input_value(&els.wishlist_id, &view.wishlist_id);
    dom::set_input_value(&els.wishlist_name, &view.wishlist_name);
    dom::set_input_value(&els.owner_id, &view.owner_id);
    dom::set_input_value(&els.item_id, &view.item_id);
    dom::set_input_value(&els.product_name, &view.product_name);
    dom::set_input_value(&els.product_id, &view.product_id);
    dom::set_input_value(&els.item_quantity, &view.item_quantity);

    dom::set_text(&els.flash_message, &view.flash);

    render_results(&els.search_results, view.wishlist_results.as_ref());
    render_results(&els.search_item_results, view.item_results.as_ref());

    state::set_view(view.clone());
}

fn render_results(container: &web_sys::Element, table: Option<&ResultTable>) {
    let html = table.map(ResultTable::to_html).unwrap_or_default();
    dom::set_inner_html(container, &html);
}
