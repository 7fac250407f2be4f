//! Catalog state and its pure transition function.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::product::Product;

/// Which fetch operation an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchKind {
    /// Unconditional fetch of the full collection.
    All,
    /// Fetch filtered by price range.
    ByPrice,
    /// Fetch filtered by category.
    ByCategory,
    /// Fetch filtered by price range and category.
    ByPriceAndCategory,
}

impl FetchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::All => "all",
            FetchKind::ByPrice => "by_price",
            FetchKind::ByCategory => "by_category",
            FetchKind::ByPriceAndCategory => "by_price_and_category",
        }
    }

    /// Whether this operation filters the fetched collection. Filtered
    /// operations report empty results and clear products on failure;
    /// the unconditional fetch does neither.
    fn is_filtered(&self) -> bool {
        !matches!(self, FetchKind::All)
    }
}

/// The status message shown alongside the collection.
///
/// At most one of these is set at any instant, and only once loading has
/// finished; the three UI states "no message", "informational
/// empty-result message", and "hard failure message" are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreNotice {
    /// The unconditional fetch failed.
    ListUnavailable,
    /// A filtered fetch failed.
    SearchUnavailable,
    /// A filtered fetch succeeded with zero matches. Informational, not
    /// a failure.
    NoResults,
}

impl StoreNotice {
    /// The fixed localized message for this notice.
    pub fn message(&self) -> &'static str {
        match self {
            StoreNotice::ListUnavailable => "product list unavailable",
            StoreNotice::SearchUnavailable => "search unavailable",
            StoreNotice::NoResults => "no results",
        }
    }

    /// Whether this notice reports a fetch failure rather than an empty
    /// result.
    pub fn is_failure(&self) -> bool {
        !matches!(self, StoreNotice::NoResults)
    }
}

impl fmt::Display for StoreNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// A state transition event. Within one operation, `Pending` always
/// precedes exactly one of `Fulfilled` / `Rejected`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Pending { kind: FetchKind },
    Fulfilled { kind: FetchKind, products: Vec<Product> },
    Rejected { kind: FetchKind },
}

/// The canonical catalog state, owned exclusively by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Currently-displayed collection, in fetch-response order.
    pub products: Vec<Product>,
    /// True while any fetch operation is in flight.
    pub is_loading: bool,
    /// Status message; meaningful only once `is_loading` is false.
    pub notice: Option<StoreNotice>,
    /// Bumped on every replacement of `products`. Consumers use this to
    /// detect that the collection changed; it never decreases.
    pub revision: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            is_loading: true,
            notice: None,
            revision: 0,
        }
    }
}

impl CatalogState {
    /// Apply one transition event.
    ///
    /// This is the only mutation path for catalog state. Events are
    /// applied in arrival order; when operations overlap, the last
    /// resolution wins.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Pending { .. } => {
                self.is_loading = true;
                self.notice = None;
            }
            StoreEvent::Fulfilled { kind, products } => {
                self.is_loading = false;
                self.notice = (kind.is_filtered() && products.is_empty())
                    .then_some(StoreNotice::NoResults);
                self.replace_products(products);
            }
            StoreEvent::Rejected { kind } => {
                self.is_loading = false;
                if kind.is_filtered() {
                    self.notice = Some(StoreNotice::SearchUnavailable);
                    self.replace_products(Vec::new());
                } else {
                    // The unconditional fetch keeps whatever was
                    // displayed before.
                    self.notice = Some(StoreNotice::ListUnavailable);
                }
            }
        }
    }

    fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.revision += 1;
    }
}
