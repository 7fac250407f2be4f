//! Slider-position denormalization.

use serde::{Deserialize, Serialize};

use crate::filter::bounds::PriceBounds;

/// The user-selected absolute price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentRange {
    pub low: f64,
    pub high: f64,
}

impl From<PriceBounds> for CurrentRange {
    /// The initial range equals the derived bounds.
    fn from(bounds: PriceBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }
}

/// Convert normalized slider positions (each in 0–100) into absolute
/// price values against the current bounds.
///
/// Each output bound is `floor((position / 100) * bounds.max + bounds.min)`.
/// No clamping or reordering: a non-monotonic pair (low > high) passes
/// through unmodified, and the filter engine handles the inverted range.
pub fn denormalize(slider_low: f64, slider_high: f64, bounds: &PriceBounds) -> CurrentRange {
    CurrentRange {
        low: denormalize_one(slider_low, bounds),
        high: denormalize_one(slider_high, bounds),
    }
}

fn denormalize_one(position: f64, bounds: &PriceBounds) -> f64 {
    ((position / 100.0) * bounds.max + bounds.min).floor()
}
