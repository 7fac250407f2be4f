//! Optional price bounds for the combined fetch operation.

use serde::{Deserialize, Serialize};

/// A price window where an absent bound means "no constraint".
///
/// The source system this replaces treated a falsy bound as
/// unconstrained, which made a bound of exactly 0 indistinguishable from
/// "unset". Here "no constraint" is an explicit `None`;
/// [`PriceWindow::from_legacy`] is the only place the old zero-means-unset
/// reading survives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceWindow {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceWindow {
    /// A window with explicit optional bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// A fully unconstrained window.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Build a window from legacy numeric bounds, where a bound of 0 is
    /// read as "unset".
    pub fn from_legacy(min: f64, max: f64) -> Self {
        Self {
            min: (min != 0.0).then_some(min),
            max: (max != 0.0).then_some(max),
        }
    }

    /// Whether a price satisfies both bounds; absent bounds always pass.
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}
