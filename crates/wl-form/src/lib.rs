//! Wishlist form controller.
//!
//! The form is modelled as a plain [`FormView`]. Each [`Action`] takes the
//! current view, issues at most one API call through a
//! [`wl_client::WishlistClient`], and returns the next view. Rendering the
//! view into a page or a terminal is left to the caller.

pub mod action;
pub mod controller;
pub mod parse;
pub mod view;

pub use action::{Action, UnknownAction};
pub use controller::{Controller, SUCCESS};
pub use view::{Column, FormView, ResultTable, escape_html};
