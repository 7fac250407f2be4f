//! Fetch configuration.

use serde::{Deserialize, Serialize};

/// Where the product collection lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the product collection endpoint.
    #[serde(default = "default_products_path")]
    pub products_path: String,
}

fn default_base_url() -> String {
    "https://api.orbitshop.dev".to_string()
}

fn default_products_path() -> String {
    "/products".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
        }
    }
}

impl FetchConfig {
    /// Config against a specific backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The full product collection URL.
    pub fn products_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.products_path
        )
    }
}
