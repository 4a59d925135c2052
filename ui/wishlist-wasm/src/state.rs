//! Last rendered view.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Inputs are always re-read from the page; the stored view only keeps what
//! the page cannot give back, i.e. the result tables.

use std::cell::RefCell;

use wl_form::FormView;

thread_local! {
    static VIEW: RefCell<FormView> = RefCell::new(FormView::default());
}

pub fn view() -> FormView {
    VIEW.with(|v| v.borrow().clone())
}

pub fn set_view(view: FormView) {
    VIEW.with(|v| *v.borrow_mut() = view);
}
