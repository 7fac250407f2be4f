//! Filter-state derivation and the visible-subset engine.
//!
//! Everything here is pure: bounds and toggles are derived wholesale
//! from a collection, slider positions denormalize against the bounds,
//! and the engine combines range + toggles into the visible subset.

mod bounds;
mod engine;
mod range;
mod window;

pub use bounds::{derive, CategoryToggles, PriceBounds};
pub use engine::visible;
pub use range::{denormalize, CurrentRange};
pub use window::PriceWindow;
