//! Catalog view core for orbitshop.
//!
//! This crate implements the filter-state synchronization engine behind
//! the product catalog view:
//!
//! - **Product**: the typed wire model, price coerced once at ingestion
//! - **CatalogStore**: canonical collection + loading flag + status
//!   notice, mutated only through a pure reducer by four async fetch
//!   operations
//! - **Filter**: bounds derivation, slider denormalization, category
//!   toggles, and the visible-subset engine
//! - **CatalogView**: the composition root the presentation layer reads
//!   from and sends `on_slide_price` / `on_toggle_category` into
//!
//! # Example
//!
//! ```rust,ignore
//! use orbit_catalog::prelude::*;
//!
//! let mut view = CatalogView::new(fetcher);
//! view.load().await;
//!
//! view.on_slide_price(0.0, 50.0);
//! view.on_toggle_category("lunar");
//!
//! for product in view.visible() {
//!     println!("{} {}", product.name, product.price);
//! }
//! ```
//!
//! The engine runs on one cooperative thread: fetch operations suspend
//! at the network boundary and state mutates only between suspension
//! points. Overlapping fetches are not cancelled or fenced; the last
//! resolution wins, which mirrors the system this replaces.

pub mod fetch;
pub mod filter;
pub mod product;
pub mod store;
pub mod view;

pub use fetch::{FetchError, ProductFetcher};
pub use product::{Product, ProductIdx};
pub use store::{CatalogStore, StoreNotice};
pub use view::CatalogView;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::fetch::{FetchError, ProductFetcher};
    pub use crate::filter::{
        denormalize, derive, visible, CategoryToggles, CurrentRange, PriceBounds, PriceWindow,
    };
    pub use crate::product::{Product, ProductIdx};
    pub use crate::store::{CatalogState, CatalogStore, FetchKind, StoreEvent, StoreNotice};
    pub use crate::view::CatalogView;
}
