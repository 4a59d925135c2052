use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wishlist_items: Vec<WishlistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistItem {
    pub id: i64,
    pub wishlist_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub item_quantity: i64,
}

/// Body of `POST /wishlists` and `PUT /wishlists/{id}`.
///
/// `owner_id` is `None` when the form held no parsable integer; it goes out
/// as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistPayload {
    pub name: String,
    pub owner_id: Option<i64>,
}

/// Body of the item create and update calls. `id` is `null` on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemPayload {
    pub id: Option<i64>,
    pub product_name: String,
    pub product_id: Option<i64>,
    pub item_quantity: Option<i64>,
    pub wishlist_id: Option<i64>,
}

/// Query for `GET /wishlists`. At most one filter is set by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistQuery {
    pub owner_id: Option<String>,
    pub name: Option<String>,
}

impl WishlistQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(owner_id) = &self.owner_id {
            pairs.push(("owner_id", owner_id.clone()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

/// Error envelope returned by the service on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Reason phrase some error handlers send instead of a message.
    #[serde(default)]
    pub error: Option<String>,
}
