//! HTTP product fetcher for the orbit catalog.
//!
//! Provides the [`orbit_catalog::ProductFetcher`] implementation used in
//! production: a small GET client over Spin's outbound HTTP with JSON
//! decoding into the typed product model.
//!
//! # Example
//!
//! ```rust,ignore
//! use orbit_catalog::CatalogView;
//! use orbit_data::{FetchConfig, HttpProductFetcher};
//!
//! let fetcher = HttpProductFetcher::new(FetchConfig::default());
//! let mut view = CatalogView::new(fetcher);
//! view.load().await;
//! ```

mod config;
mod error;
mod fetcher;
mod response;

pub use config::FetchConfig;
pub use error::ClientError;
pub use fetcher::HttpProductFetcher;
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for catalog reads.
///
/// The catalog only ever GETs; anything that writes belongs to another
/// service.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header included in every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Start a GET request.
    pub fn get(&self, url: impl Into<String>) -> GetRequest {
        GetRequest {
            url: url.into(),
            headers: self.default_headers.clone(),
        }
    }
}

/// A GET request being built.
#[derive(Debug, Clone)]
pub struct GetRequest {
    #[allow(dead_code)] // Read in the wasm32 send path
    url: String,
    headers: HashMap<String, String>,
}

impl GetRequest {
    /// Add a header to this request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Send the request.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, ClientError> {
        use spin_sdk::http::{Method, Request};

        let mut request = Request::builder();
        request.method(Method::Get);
        request.uri(&self.url);
        for (key, value) in &self.headers {
            request.header(key.as_str(), value.as_str());
        }
        let request = request.build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = *response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request (non-WASM stub: an empty collection, so native
    /// builds and tests run without a network).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, ClientError> {
        Ok(Response::new(200, HashMap::new(), b"[]".to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_carried_into_requests() {
        let client = FetchClient::new().with_default_header("Accept", "application/json");
        let request = client.get("https://api.example.com/products");
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_request_header_overrides_default() {
        let client = FetchClient::new().with_default_header("Accept", "text/plain");
        let request = client
            .get("https://api.example.com/products")
            .accept("application/json");
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
