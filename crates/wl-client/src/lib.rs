//! Typed client for the wishlist REST API.
//!
//! Requests are built once by [`WishlistClient`] against an [`Endpoints`]
//! base path and handed to a [`Transport`]. The native build ships a
//! `reqwest` transport; the browser front end supplies its own over `fetch`.

mod client;
mod config;
mod endpoints;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
#[cfg(feature = "native")]
mod native;

pub use client::WishlistClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_BASE_PATH};
pub use endpoints::{Endpoints, encode_component};
#[cfg(feature = "native")]
pub use native::ReqwestTransport;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single API call, independent of how it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Already percent-encoded path, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query<K: Into<String>>(mut self, pairs: Vec<(K, String)>) -> Self {
        self.query = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Path plus encoded query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    /// Absolute URL under `origin`. An empty origin yields a same-origin relative URL.
    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path_and_query())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ClientError {
    /// Text for the flash message area. Server messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Sends one request and returns the raw response.
///
/// Non-2xx statuses are not errors at this layer. Implementations are
/// driven from a single-threaded UI loop, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
