use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::DEFAULT_BASE_PATH;

/// Unreserved characters stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single path segment or query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Resource paths under a configurable base path.
///
/// Both screen variants (`/wishlists` and `/api/wishlists`) are served by
/// the same builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl Endpoints {
    pub fn new(base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        Self {
            base_path: format!("/{trimmed}"),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn wishlists(&self) -> String {
        self.base_path.clone()
    }

    pub fn wishlist(&self, id: &str) -> String {
        format!("{}/{}", self.base_path, encode_component(id))
    }

    pub fn wishlist_clear(&self, id: &str) -> String {
        format!("{}/clear", self.wishlist(id))
    }

    pub fn items(&self, wishlist_id: &str) -> String {
        format!("{}/items", self.wishlist(wishlist_id))
    }

    pub fn item(&self, wishlist_id: &str, item_id: &str) -> String {
        format!("{}/{}", self.items(wishlist_id), encode_component(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalised() {
        assert_eq!(Endpoints::new("api/wishlists/").base_path(), "/api/wishlists");
        assert_eq!(Endpoints::new("/wishlists").base_path(), "/wishlists");
        assert_eq!(Endpoints::default().base_path(), "/wishlists");
    }

    #[test]
    fn item_paths_nest_under_wishlist() {
        let endpoints = Endpoints::new("/api/wishlists");
        assert_eq!(endpoints.wishlist_clear("5"), "/api/wishlists/5/clear");
        assert_eq!(endpoints.items("5"), "/api/wishlists/5/items");
        assert_eq!(endpoints.item("5", "12"), "/api/wishlists/5/items/12");
    }

    #[test]
    fn user_supplied_segments_are_escaped() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.wishlist("3/../7"), "/wishlists/3%2F..%2F7");
        assert_eq!(encode_component("a b"), "a%20b");
    }
}
