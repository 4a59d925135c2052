use serde::de::DeserializeOwned;
use tracing::debug;
use wl_api_types::{
    ErrorBody, ItemPayload, Wishlist, WishlistItem, WishlistPayload, WishlistQuery,
};

use crate::{ApiRequest, ApiResponse, ClientError, Endpoints, Method, Transport};

/// One method per wishlist endpoint. Ids are taken as the raw text the user
/// typed; they are escaped into the path, never parsed.
pub struct WishlistClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> WishlistClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Wishlists ──

    /// POST {base}
    pub async fn create_wishlist(&self, payload: &WishlistPayload) -> Result<Wishlist, ClientError> {
        let request = ApiRequest::new(Method::Post, self.endpoints.wishlists()).with_json(payload)?;
        self.fetch(request).await
    }

    /// PUT {base}/{id}
    pub async fn update_wishlist(
        &self,
        id: &str,
        payload: &WishlistPayload,
    ) -> Result<Wishlist, ClientError> {
        let request = ApiRequest::new(Method::Put, self.endpoints.wishlist(id)).with_json(payload)?;
        self.fetch(request).await
    }

    /// GET {base}/{id}
    pub async fn get_wishlist(&self, id: &str) -> Result<Wishlist, ClientError> {
        self.fetch(ApiRequest::new(Method::Get, self.endpoints.wishlist(id)))
            .await
    }

    /// GET {base}?owner_id=&name=
    pub async fn list_wishlists(&self, query: &WishlistQuery) -> Result<Vec<Wishlist>, ClientError> {
        let request = ApiRequest::new(Method::Get, self.endpoints.wishlists()).with_query(query.pairs());
        self.fetch(request).await
    }

    /// DELETE {base}/{id}
    pub async fn delete_wishlist(&self, id: &str) -> Result<(), ClientError> {
        self.execute(ApiRequest::new(Method::Delete, self.endpoints.wishlist(id)))
            .await
            .map(|_| ())
    }

    /// PUT {base}/{id}/clear
    pub async fn clear_wishlist(&self, id: &str) -> Result<(), ClientError> {
        self.execute(ApiRequest::new(Method::Put, self.endpoints.wishlist_clear(id)))
            .await
            .map(|_| ())
    }

    // ── Items ──

    /// POST {base}/{wishlist_id}/items
    pub async fn create_item(
        &self,
        wishlist_id: &str,
        payload: &ItemPayload,
    ) -> Result<WishlistItem, ClientError> {
        let request =
            ApiRequest::new(Method::Post, self.endpoints.items(wishlist_id)).with_json(payload)?;
        self.fetch(request).await
    }

    /// GET {base}/{wishlist_id}/items/{item_id}
    pub async fn get_item(&self, wishlist_id: &str, item_id: &str) -> Result<WishlistItem, ClientError> {
        self.fetch(ApiRequest::new(Method::Get, self.endpoints.item(wishlist_id, item_id)))
            .await
    }

    /// PUT {base}/{wishlist_id}/items/{item_id}
    pub async fn update_item(
        &self,
        wishlist_id: &str,
        item_id: &str,
        payload: &ItemPayload,
    ) -> Result<WishlistItem, ClientError> {
        let request = ApiRequest::new(Method::Put, self.endpoints.item(wishlist_id, item_id))
            .with_json(payload)?;
        self.fetch(request).await
    }

    /// GET {base}/{wishlist_id}/items?name=
    pub async fn list_items(
        &self,
        wishlist_id: &str,
        name: Option<&str>,
    ) -> Result<Vec<WishlistItem>, ClientError> {
        let pairs = name
            .map(|n| vec![("name", n.to_owned())])
            .unwrap_or_default();
        let request = ApiRequest::new(Method::Get, self.endpoints.items(wishlist_id)).with_query(pairs);
        self.fetch(request).await
    }

    /// DELETE {base}/{wishlist_id}/items/{item_id}
    pub async fn delete_item(&self, wishlist_id: &str, item_id: &str) -> Result<(), ClientError> {
        self.execute(ApiRequest::new(Method::Delete, self.endpoints.item(wishlist_id, item_id)))
            .await
            .map(|_| ())
    }

    // ── Plumbing ──

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::Decode(format!("{e} (raw: {})", response.body)))
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = request.method;
        let target = request.path_and_query();
        let response = self.transport.send(request).await?;
        debug!(method = method.as_str(), path = %target, status = response.status, "wishlist api call");

        if !response.is_success() {
            return Err(api_error(&response));
        }
        Ok(response)
    }
}

fn api_error(response: &ApiResponse) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| {
            let raw = response.body.trim();
            if raw.is_empty() {
                format!("HTTP {}", response.status)
            } else {
                format!("HTTP {}: {}", response.status, raw)
            }
        });
    ClientError::Api {
        status: response.status,
        message,
    }
}
