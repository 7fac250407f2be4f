//! Deriving filter defaults from a fetched collection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The default price window derived from a collection.
///
/// `min` is always 0; `max` is the maximum observed price, or 0 for an
/// empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Bounds for an empty collection.
    pub fn empty() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

/// Per-category inclusion map.
///
/// Keys are the distinct category labels of the last derivation in
/// first-seen order; every derivation starts with all categories
/// included. The map is regenerated wholesale by [`derive`] — the only
/// outside mutation is [`CategoryToggles::toggle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryToggles {
    entries: IndexMap<String, bool>,
}

impl CategoryToggles {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the inclusion flag for one category.
    ///
    /// A key absent from the map flips from the excluded default to
    /// included, matching the source behavior this engine preserves: a
    /// stale toggle lingers in the map until the next derivation
    /// replaces it.
    pub fn toggle(&mut self, key: impl Into<String>) {
        let flag = self.entries.entry(key.into()).or_insert(false);
        *flag = !*flag;
    }

    /// Whether a category is currently included. Absent keys are
    /// excluded.
    pub fn is_included(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    /// Category labels with their inclusion flags, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of known categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the default price bounds and the initial category-inclusion
/// map from a collection, in one linear scan.
pub fn derive(products: &[Product]) -> (PriceBounds, CategoryToggles) {
    let mut max = 0.0_f64;
    let mut toggles = CategoryToggles::new();

    for product in products {
        if product.price > max {
            max = product.price;
        }
        toggles
            .entries
            .entry(product.space_category.clone())
            .or_insert(true);
    }

    (PriceBounds { min: 0.0, max }, toggles)
}
