//! Event binding.
//!
//! Every button gets one click listener. Each click spawns its own local
//! future; clicks are never queued or cancelled, so the last response to
//! arrive owns the form.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wl_form::{Action, Controller};

use crate::api::FetchTransport;
use crate::dom::{self, Elements};
use crate::form;

/// Bind all button listeners. Call once after init.
pub fn bind_events(els: &Elements, controller: Rc<Controller<FetchTransport>>) -> Result<(), JsValue> {
    for (action, button) in &els.buttons {
        let action = *action;
        let els2 = els.clone();
        let controller = Rc::clone(&controller);
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els3 = els2.clone();
            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                on_action(&els3, &controller, action).await;
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

async fn on_action(els: &Elements, controller: &Controller<FetchTransport>, action: Action) {
    let current = form::read(els);
    dom::set_text(&els.flash_message, "");
    let next = controller.dispatch(action, &current).await;
    form::apply(els, &next);
}
