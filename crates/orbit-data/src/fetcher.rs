//! The production product fetcher.

use async_trait::async_trait;

use orbit_catalog::{FetchError, Product, ProductFetcher};

use crate::config::FetchConfig;
use crate::FetchClient;

/// Fetches the product collection over HTTP.
///
/// One logical operation: GET the configured endpoint and decode a JSON
/// array of products. No retries; the store treats any failure as one
/// opaque outcome.
pub struct HttpProductFetcher {
    client: FetchClient,
    config: FetchConfig,
}

impl HttpProductFetcher {
    /// Create a fetcher against the configured backend.
    pub fn new(config: FetchConfig) -> Self {
        Self {
            client: FetchClient::new().with_default_header("Accept", "application/json"),
            config,
        }
    }

    /// Use a preconfigured client (extra default headers, etc.).
    pub fn with_client(mut self, client: FetchClient) -> Self {
        self.client = client;
        self
    }
}

#[async_trait(?Send)]
impl ProductFetcher for HttpProductFetcher {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.config.products_url();
        let response = self.client.get(&url).send().await.map_err(FetchError::from)?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url,
            });
        }

        let products = response
            .json::<Vec<Product>>()
            .map_err(FetchError::from)?;
        Ok(products)
    }
}
