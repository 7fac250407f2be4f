//! Product types as fetched from the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique numeric product identifier.
///
/// A newtype so a product index is never confused with a price, count,
/// or any other number flowing through the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductIdx(u64);

impl ProductIdx {
    /// Create an identifier from a raw value.
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }

    /// Get the raw value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductIdx {
    fn from(idx: u64) -> Self {
        Self(idx)
    }
}

/// A product in the catalog.
///
/// Read-only from the core's perspective; identity is `idx`. The price
/// arrives from the backend as either a JSON number or a numeric string
/// and is coerced into a typed `f64` once, at ingestion, so nothing
/// downstream ever re-coerces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub idx: ProductIdx,
    /// Product name.
    pub name: String,
    /// Price in whole currency units. Non-negative.
    #[serde(deserialize_with = "wire_price::deserialize")]
    pub price: f64,
    /// Category label (e.g. orbital, lunar).
    #[serde(rename = "spaceCategory")]
    pub space_category: String,
    /// Image URL for listings.
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with the fields the filter engine cares about.
    pub fn new(
        idx: impl Into<ProductIdx>,
        name: impl Into<String>,
        price: f64,
        space_category: impl Into<String>,
    ) -> Self {
        Self {
            idx: idx.into(),
            name: name.into(),
            price,
            space_category: space_category.into(),
            image_url: None,
            description: None,
        }
    }
}

/// Price ingestion: accepts a JSON number or a numeric string, rejects
/// negative and non-finite values.
mod wire_price {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let price = match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(n) => n,
            RawPrice::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid price: {:?}", s)))?,
        };

        if !price.is_finite() || price < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "price must be a non-negative finite number, got {}",
                price
            )));
        }

        Ok(price)
    }
}
