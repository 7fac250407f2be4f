//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur while fetching from the catalog backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<ClientError> for orbit_catalog::FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(msg) => orbit_catalog::FetchError::Request(msg),
            ClientError::Http { status, url } => orbit_catalog::FetchError::Http { status, url },
            ClientError::Parse(msg) => orbit_catalog::FetchError::Decode(msg),
        }
    }
}
