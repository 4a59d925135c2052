use crate::endpoints::Endpoints;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_BASE_PATH: &str = "/wishlists";

/// Where the wishlist service lives.
///
/// `WISHLIST_API_URL` and `WISHLIST_BASE_PATH` fill in any value not
/// passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub base_path: String,
}

impl ClientConfig {
    pub fn new(api_url: Option<String>, base_path: Option<String>) -> Self {
        let api_url = api_url
            .or_else(|| std::env::var("WISHLIST_API_URL").ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_path = base_path
            .or_else(|| std::env::var("WISHLIST_BASE_PATH").ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            base_path,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_path)
    }
}
