//! One handler per button.
//!
//! Every handler empties the flash message, reads its inputs from the
//! current view, issues one request and writes the outcome back. Clear is
//! the only action that never touches the network.

use tracing::{debug, info};
use wl_api_types::{ItemPayload, WishlistPayload, WishlistQuery};
use wl_client::{ClientError, Transport, WishlistClient};

use crate::action::Action;
use crate::parse::int_field;
use crate::view::{FormView, ResultTable};

pub const SUCCESS: &str = "Success";

pub struct Controller<T> {
    client: WishlistClient<T>,
}

impl<T: Transport> Controller<T> {
    pub fn new(client: WishlistClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &WishlistClient<T> {
        &self.client
    }

    /// Run `action` against `form` and return the next view.
    pub async fn dispatch(&self, action: Action, form: &FormView) -> FormView {
        info!(action = action.name(), "dispatching form action");
        let mut view = form.clone();
        view.flash.clear();

        match action {
            Action::CreateWishlist => self.create_wishlist(&mut view).await,
            Action::UpdateWishlist => self.update_wishlist(&mut view).await,
            Action::RetrieveWishlist => self.retrieve_wishlist(&mut view).await,
            Action::SearchWishlists => self.search_wishlists(&mut view).await,
            Action::DeleteWishlist => self.delete_wishlist(&mut view).await,
            Action::EmptyWishlist => self.empty_wishlist(&mut view).await,
            Action::CreateItem => self.create_item(&mut view).await,
            Action::RetrieveItem => self.retrieve_item(&mut view).await,
            Action::UpdateItem => self.update_item(&mut view).await,
            Action::SearchItems => self.search_items(&mut view).await,
            Action::DeleteItem => self.delete_item(&mut view).await,
            Action::ClearForm => view.clear(),
        }
        view
    }

    // ── Wishlists ──

    async fn create_wishlist(&self, view: &mut FormView) {
        let payload = wishlist_payload(view);
        match self.client.create_wishlist(&payload).await {
            Ok(wishlist) => {
                view.show_wishlist(&wishlist);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    async fn update_wishlist(&self, view: &mut FormView) {
        let id = view.wishlist_id.clone();
        let payload = wishlist_payload(view);
        match self.client.update_wishlist(&id, &payload).await {
            Ok(wishlist) => {
                view.show_wishlist(&wishlist);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    async fn retrieve_wishlist(&self, view: &mut FormView) {
        let id = view.wishlist_id.clone();
        match self.client.get_wishlist(&id).await {
            Ok(wishlist) => {
                view.show_wishlist(&wishlist);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => clear_with_error(view, err),
        }
    }

    /// Id wins over owner, owner over name; nothing set lists everything.
    async fn search_wishlists(&self, view: &mut FormView) {
        let id = view.wishlist_id.trim().to_owned();
        let owner_id = view.owner_id.trim().to_owned();
        let name = view.wishlist_name.trim().to_owned();

        let found = if !id.is_empty() {
            self.client.get_wishlist(&id).await.map(|w| vec![w])
        } else {
            let query = if !owner_id.is_empty() {
                WishlistQuery {
                    owner_id: Some(owner_id),
                    name: None,
                }
            } else if !name.is_empty() {
                WishlistQuery {
                    owner_id: None,
                    name: Some(name),
                }
            } else {
                WishlistQuery::default()
            };
            self.client.list_wishlists(&query).await
        };

        match found {
            Ok(wishlists) => {
                view.wishlist_results = Some(ResultTable::wishlists(&wishlists));
                if let Some(first) = wishlists.first() {
                    view.show_wishlist(first);
                }
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    async fn delete_wishlist(&self, view: &mut FormView) {
        let id = view.wishlist_id.clone();
        match self.client.delete_wishlist(&id).await {
            Ok(()) => {
                view.clear();
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => clear_with_error(view, err),
        }
    }

    async fn empty_wishlist(&self, view: &mut FormView) {
        let id = view.wishlist_id.clone();
        let name = view.wishlist_name.clone();
        match self.client.clear_wishlist(&id).await {
            Ok(()) => {
                view.clear();
                view.wishlist_id = id;
                view.flash = format!("{name} wishlist has been cleared!");
            }
            Err(err) => clear_with_error(view, err),
        }
    }

    // ── Items ──

    async fn create_item(&self, view: &mut FormView) {
        let wishlist_id = view.wishlist_id.clone();
        let quantity = if view.item_quantity.trim().is_empty() {
            "1"
        } else {
            view.item_quantity.as_str()
        };
        let payload = ItemPayload {
            id: None,
            product_name: view.product_name.clone(),
            product_id: int_field("product_id", &view.product_id),
            item_quantity: int_field("item_quantity", quantity),
            wishlist_id: int_field("wishlist_id", &wishlist_id),
        };
        match self.client.create_item(&wishlist_id, &payload).await {
            Ok(item) => {
                view.show_item(&item);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    async fn retrieve_item(&self, view: &mut FormView) {
        let wishlist_id = view.wishlist_id.clone();
        let item_id = view.item_id.clone();
        match self.client.get_item(&wishlist_id, &item_id).await {
            Ok(item) => {
                view.show_item(&item);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => clear_with_error(view, err),
        }
    }

    async fn update_item(&self, view: &mut FormView) {
        let wishlist_id = view.wishlist_id.clone();
        let item_id = view.item_id.clone();
        let payload = ItemPayload {
            id: int_field("item_id", &item_id),
            product_name: view.product_name.clone(),
            product_id: int_field("product_id", &view.product_id),
            item_quantity: int_field("item_quantity", &view.item_quantity),
            wishlist_id: int_field("wishlist_id", &wishlist_id),
        };
        match self.client.update_item(&wishlist_id, &item_id, &payload).await {
            Ok(item) => {
                view.show_item(&item);
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    /// Item id wins over product name; nothing set lists the whole wishlist.
    async fn search_items(&self, view: &mut FormView) {
        let wishlist_id = view.wishlist_id.trim().to_owned();
        let item_id = view.item_id.trim().to_owned();
        let product_name = view.product_name.trim().to_owned();

        let found = if !item_id.is_empty() {
            self.client
                .get_item(&wishlist_id, &item_id)
                .await
                .map(|item| vec![item])
        } else if !product_name.is_empty() {
            self.client.list_items(&wishlist_id, Some(&product_name)).await
        } else {
            self.client.list_items(&wishlist_id, None).await
        };

        match found {
            Ok(items) => {
                view.item_results = Some(ResultTable::items(&items));
                if let Some(first) = items.first() {
                    view.show_item(first);
                }
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => flash_error(view, err),
        }
    }

    async fn delete_item(&self, view: &mut FormView) {
        let wishlist_id = view.wishlist_id.clone();
        let item_id = view.item_id.clone();
        match self.client.delete_item(&wishlist_id, &item_id).await {
            Ok(()) => {
                view.clear();
                view.flash = SUCCESS.to_owned();
            }
            Err(err) => clear_with_error(view, err),
        }
    }
}

fn wishlist_payload(view: &FormView) -> WishlistPayload {
    WishlistPayload {
        name: view.wishlist_name.clone(),
        owner_id: int_field("owner_id", &view.owner_id),
    }
}

fn flash_error(view: &mut FormView, err: ClientError) {
    debug!(error = %err, "form action failed");
    view.flash = err.user_message();
}

fn clear_with_error(view: &mut FormView, err: ClientError) {
    view.clear();
    flash_error(view, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wl_client::mock::ScriptedTransport;
    use wl_client::{Endpoints, Method};

    fn controller(transport: ScriptedTransport) -> Controller<ScriptedTransport> {
        Controller::new(WishlistClient::new(transport, Endpoints::default()))
    }

    fn sent(controller: &Controller<ScriptedTransport>) -> Vec<wl_client::ApiRequest> {
        controller.client().transport().requests()
    }

    fn not_found(message: &str) -> serde_json::Value {
        json!({"status": 404, "error": "Not Found", "message": message})
    }

    #[tokio::test]
    async fn create_wishlist_shows_response() {
        let controller = controller(
            ScriptedTransport::new().respond(201, json!({"id": 3, "name": "Birthday", "owner_id": 7})),
        );
        let form = FormView {
            wishlist_name: "Birthday".to_owned(),
            owner_id: "7".to_owned(),
            flash: "stale".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::CreateWishlist, &form).await;

        let requests = sent(&controller);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/wishlists");
        assert_eq!(requests[0].body, Some(json!({"name": "Birthday", "owner_id": 7})));
        assert_eq!(view.wishlist_id, "3");
        assert_eq!(view.wishlist_name, "Birthday");
        assert_eq!(view.owner_id, "7");
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn non_numeric_owner_is_sent_as_null() {
        let controller = controller(ScriptedTransport::new().respond(
            400,
            json!({"message": "Invalid type for integer [owner_id]: <class 'NoneType'>"}),
        ));
        let form = FormView {
            wishlist_name: "Birthday".to_owned(),
            owner_id: "seven".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::CreateWishlist, &form).await;

        assert_eq!(sent(&controller)[0].body, Some(json!({"name": "Birthday", "owner_id": null})));
        assert_eq!(view.flash, "Invalid type for integer [owner_id]: <class 'NoneType'>");
        assert_eq!(view.owner_id, "seven");
    }

    #[tokio::test]
    async fn update_failure_keeps_form() {
        let controller = controller(ScriptedTransport::new().respond(404, not_found("gone")));
        let form = FormView {
            wishlist_id: "4".to_owned(),
            wishlist_name: "Gifts".to_owned(),
            owner_id: "2".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::UpdateWishlist, &form).await;

        assert_eq!(sent(&controller)[0].method, Method::Put);
        assert_eq!(sent(&controller)[0].path, "/wishlists/4");
        assert_eq!(view.wishlist_name, "Gifts");
        assert_eq!(view.flash, "gone");
    }

    #[tokio::test]
    async fn retrieve_failure_blanks_form() {
        let controller = controller(
            ScriptedTransport::new().respond(404, not_found("Wishlist with id '9' was not found.")),
        );
        let form = FormView {
            wishlist_id: "9".to_owned(),
            wishlist_name: "Old".to_owned(),
            item_id: "1".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::RetrieveWishlist, &form).await;

        assert!(view.fields_blank());
        assert_eq!(view.flash, "Wishlist with id '9' was not found.");
    }

    #[tokio::test]
    async fn search_by_id_fetches_one_and_renders_one_row() {
        let controller = controller(
            ScriptedTransport::new().respond(200, json!({"id": 5, "name": "Gifts", "owner_id": 2})),
        );
        let form = FormView {
            wishlist_id: "5".to_owned(),
            owner_id: "2".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::SearchWishlists, &form).await;

        let requests = sent(&controller);
        assert_eq!(requests[0].path_and_query(), "/wishlists/5");
        let table = view.wishlist_results.expect("table");
        assert_eq!(table.rows, vec![vec!["5".to_owned(), "Gifts".to_owned(), "2".to_owned()]]);
        assert_eq!(view.wishlist_name, "Gifts");
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn search_prefers_owner_over_name() {
        let controller = controller(ScriptedTransport::new().respond(200, json!([])));
        let form = FormView {
            owner_id: "7".to_owned(),
            wishlist_name: "Birthday".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::SearchWishlists, &form).await;

        assert_eq!(sent(&controller)[0].path_and_query(), "/wishlists?owner_id=7");
        assert_eq!(view.wishlist_results.map(|t| t.rows.len()), Some(0));
        assert_eq!(view.wishlist_name, "Birthday");
    }

    #[tokio::test]
    async fn search_without_filters_lists_all_and_copies_first() {
        let controller = controller(ScriptedTransport::new().respond(
            200,
            json!([
                {"id": 1, "name": "Birthday", "owner_id": 7},
                {"id": 2, "name": "Holiday", "owner_id": 8}
            ]),
        ));

        let view = controller
            .dispatch(Action::SearchWishlists, &FormView::default())
            .await;

        assert_eq!(sent(&controller)[0].path_and_query(), "/wishlists");
        assert_eq!(view.wishlist_results.as_ref().map(|t| t.rows.len()), Some(2));
        assert_eq!(view.wishlist_id, "1");
        assert_eq!(view.owner_id, "7");
    }

    #[tokio::test]
    async fn delete_blanks_form_either_way() {
        let controller = controller(
            ScriptedTransport::new()
                .respond_text(204, "")
                .respond(404, not_found("missing")),
        );
        let form = FormView {
            wishlist_id: "5".to_owned(),
            wishlist_name: "Gifts".to_owned(),
            wishlist_results: Some(ResultTable::wishlists(&[])),
            ..FormView::default()
        };

        let ok = controller.dispatch(Action::DeleteWishlist, &form).await;
        assert!(ok.fields_blank());
        assert_eq!(ok.wishlist_results, None);
        assert_eq!(ok.flash, SUCCESS);

        let failed = controller.dispatch(Action::DeleteWishlist, &form).await;
        assert!(failed.fields_blank());
        assert_eq!(failed.flash, "missing");
    }

    #[tokio::test]
    async fn empty_keeps_id_and_names_the_wishlist() {
        let controller = controller(ScriptedTransport::new().respond_text(200, ""));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            wishlist_name: "Gifts".to_owned(),
            owner_id: "2".to_owned(),
            product_name: "Lamp".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::EmptyWishlist, &form).await;

        let requests = sent(&controller);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/wishlists/5/clear");
        assert_eq!(view.flash, "Gifts wishlist has been cleared!");
        assert_eq!(view.wishlist_id, "5");
        assert_eq!(view.wishlist_name, "");
        assert_eq!(view.product_name, "");
    }

    #[tokio::test]
    async fn create_item_defaults_quantity_to_one() {
        let controller = controller(ScriptedTransport::new().respond(
            201,
            json!({"id": 12, "wishlist_id": 5, "product_id": 42, "product_name": "Lamp", "item_quantity": 1}),
        ));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            product_name: "Lamp".to_owned(),
            product_id: "42".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::CreateItem, &form).await;

        let requests = sent(&controller);
        assert_eq!(requests[0].path, "/wishlists/5/items");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "id": null,
                "product_name": "Lamp",
                "product_id": 42,
                "item_quantity": 1,
                "wishlist_id": 5
            }))
        );
        assert_eq!(view.item_id, "12");
        assert_eq!(view.item_quantity, "1");
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn update_item_sends_parsed_id() {
        let controller = controller(ScriptedTransport::new().respond(
            200,
            json!({"id": 12, "wishlist_id": 5, "product_id": 42, "product_name": "Desk lamp", "item_quantity": 3}),
        ));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            item_id: "12".to_owned(),
            product_name: "Desk lamp".to_owned(),
            product_id: "42".to_owned(),
            item_quantity: "3".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::UpdateItem, &form).await;

        let requests = sent(&controller);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/wishlists/5/items/12");
        assert_eq!(requests[0].body.as_ref().map(|b| b["id"].clone()), Some(json!(12)));
        assert_eq!(view.product_name, "Desk lamp");
    }

    #[tokio::test]
    async fn retrieve_item_failure_blanks_form() {
        let controller = controller(ScriptedTransport::new().fail("connection refused"));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            item_id: "12".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::RetrieveItem, &form).await;

        assert!(view.fields_blank());
        assert_eq!(view.flash, "request failed: connection refused");
    }

    #[tokio::test]
    async fn item_search_by_id_uses_wishlist_id() {
        let controller = controller(ScriptedTransport::new().respond(
            200,
            json!({"id": 12, "wishlist_id": 5, "product_id": 42, "product_name": "Lamp", "item_quantity": 2}),
        ));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            item_id: "12".to_owned(),
            product_name: "ignored".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::SearchItems, &form).await;

        assert_eq!(sent(&controller)[0].path_and_query(), "/wishlists/5/items/12");
        assert_eq!(view.item_results.map(|t| t.rows.len()), Some(1));
        assert_eq!(view.product_name, "Lamp");
    }

    #[tokio::test]
    async fn item_search_by_name_queries_wishlist() {
        let controller = controller(ScriptedTransport::new().respond(200, json!([])));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            product_name: "Lamp".to_owned(),
            ..FormView::default()
        };

        controller.dispatch(Action::SearchItems, &form).await;

        assert_eq!(sent(&controller)[0].path_and_query(), "/wishlists/5/items?name=Lamp");
    }

    #[tokio::test]
    async fn item_search_without_filters_lists_wishlist_items() {
        let controller = controller(ScriptedTransport::new().respond(
            200,
            json!([{"id": 12, "wishlist_id": 5, "product_id": 42, "product_name": "Lamp", "item_quantity": 2}]),
        ));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::SearchItems, &form).await;

        assert_eq!(sent(&controller)[0].method, Method::Get);
        assert_eq!(sent(&controller)[0].path_and_query(), "/wishlists/5/items");
        assert_eq!(view.item_results.as_ref().map(|t| t.rows.len()), Some(1));
        assert_eq!(view.item_id, "12");
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn empty_failure_blanks_form() {
        let controller = controller(ScriptedTransport::new().respond(404, not_found("nope")));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            wishlist_name: "Gifts".to_owned(),
            owner_id: "2".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::EmptyWishlist, &form).await;

        assert_eq!(sent(&controller)[0].path, "/wishlists/5/clear");
        assert!(view.fields_blank());
        assert_eq!(view.flash, "nope");
    }

    #[tokio::test]
    async fn create_item_failure_keeps_form() {
        let controller = controller(
            ScriptedTransport::new().respond(404, not_found("Wishlist with id '5' was not found.")),
        );
        let form = FormView {
            wishlist_id: "5".to_owned(),
            product_name: "Lamp".to_owned(),
            product_id: "42".to_owned(),
            item_quantity: "2".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::CreateItem, &form).await;

        assert_eq!(view.flash, "Wishlist with id '5' was not found.");
        assert_eq!(view.wishlist_id, "5");
        assert_eq!(view.product_name, "Lamp");
        assert_eq!(view.item_quantity, "2");
    }

    #[tokio::test]
    async fn update_item_failure_keeps_form() {
        let controller = controller(
            ScriptedTransport::new().respond(404, not_found("item with id '12' was not found.")),
        );
        let form = FormView {
            wishlist_id: "5".to_owned(),
            item_id: "12".to_owned(),
            product_name: "Desk lamp".to_owned(),
            product_id: "42".to_owned(),
            item_quantity: "3".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::UpdateItem, &form).await;

        assert_eq!(view.flash, "item with id '12' was not found.");
        assert_eq!(view.item_id, "12");
        assert_eq!(view.product_name, "Desk lamp");
        assert_eq!(view.item_quantity, "3");
    }

    #[tokio::test]
    async fn retrieve_wishlist_shows_response() {
        let controller = controller(
            ScriptedTransport::new().respond(200, json!({"id": 5, "name": "Gifts", "owner_id": 2})),
        );
        let form = FormView {
            wishlist_id: "5".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::RetrieveWishlist, &form).await;

        assert_eq!(sent(&controller)[0].method, Method::Get);
        assert_eq!(sent(&controller)[0].path, "/wishlists/5");
        assert_eq!(view.wishlist_id, "5");
        assert_eq!(view.wishlist_name, "Gifts");
        assert_eq!(view.owner_id, "2");
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn delete_item_blanks_form() {
        let controller = controller(ScriptedTransport::new().respond_text(204, ""));
        let form = FormView {
            wishlist_id: "5".to_owned(),
            item_id: "12".to_owned(),
            product_name: "Lamp".to_owned(),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::DeleteItem, &form).await;

        assert_eq!(sent(&controller)[0].method, Method::Delete);
        assert_eq!(sent(&controller)[0].path, "/wishlists/5/items/12");
        assert!(view.fields_blank());
        assert_eq!(view.flash, SUCCESS);
    }

    #[tokio::test]
    async fn clear_sends_nothing() {
        let controller = controller(ScriptedTransport::new());
        let form = FormView {
            wishlist_id: "5".to_owned(),
            flash: "Success".to_owned(),
            item_results: Some(ResultTable::items(&[])),
            ..FormView::default()
        };

        let view = controller.dispatch(Action::ClearForm, &form).await;

        assert!(sent(&controller).is_empty());
        assert_eq!(view, FormView::default());
    }
}
