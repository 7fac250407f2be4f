//! The product fetcher boundary.
//!
//! The store treats fetching as a black box with exactly two outcomes:
//! success with a (possibly empty) product collection, or failure.
//! Retries, timeouts, and transport details belong to implementations,
//! never to the store.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

/// Errors a fetcher implementation can surface.
///
/// The store only distinguishes success from failure; the variants exist
/// so implementations and logs keep the cause.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the transport failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body could not be decoded into products.
    #[error("failed to decode products: {0}")]
    Decode(String),
}

/// Asynchronous source of the raw product collection.
///
/// `?Send` futures: the whole engine runs on one cooperative thread and
/// implementations may hold non-`Send` state across the network await.
#[async_trait(?Send)]
pub trait ProductFetcher {
    /// Fetch the unconditional product collection.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}
