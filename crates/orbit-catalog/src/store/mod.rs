//! The catalog store: canonical products, loading flag, status notice.
//!
//! Four fetch operations share one state container. Each follows the
//! same three-phase contract (pending, then exactly one of fulfilled or
//! rejected) and replaces the collection through the pure reducer in
//! [`state`]. Overlapping operations are not deduplicated, cancelled,
//! or fenced: resolutions apply in arrival order and the last one wins.

mod state;

pub use state::{CatalogState, FetchKind, StoreEvent, StoreNotice};

use std::cell::{Cell, RefCell};

use crate::fetch::{FetchError, ProductFetcher};
use crate::filter::PriceWindow;
use crate::product::Product;

/// Identifies one dispatched fetch operation.
///
/// Every resolution funnels through [`CatalogStore::resolve`] carrying
/// its token; a future request-id fence belongs there and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestToken {
    kind: FetchKind,
    seq: u64,
}

/// Single-owner state container for the catalog view.
///
/// All mutation happens through [`CatalogState::apply`] at well-defined
/// points on one cooperative thread; the store is intentionally `!Sync`.
pub struct CatalogStore<F> {
    fetcher: F,
    state: RefCell<CatalogState>,
    issued: Cell<u64>,
}

impl<F: ProductFetcher> CatalogStore<F> {
    /// Create a store over a product fetcher.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: RefCell::new(CatalogState::default()),
            issued: Cell::new(0),
        }
    }

    /// Fetch the unconditional collection.
    pub async fn fetch_all(&self) {
        let token = self.dispatch(FetchKind::All);
        let outcome = self.fetcher.fetch_products().await;
        self.resolve(token, outcome);
    }

    /// Fetch, then keep products priced within `[min_price, max_price]`.
    pub async fn fetch_by_price(&self, min_price: f64, max_price: f64) {
        let token = self.dispatch(FetchKind::ByPrice);
        let outcome = self.fetcher.fetch_products().await.map(|products| {
            products
                .into_iter()
                .filter(|p| p.price >= min_price && p.price <= max_price)
                .collect()
        });
        self.resolve(token, outcome);
    }

    /// Fetch, then keep products in the given category.
    pub async fn fetch_by_category(&self, category: &str) {
        let token = self.dispatch(FetchKind::ByCategory);
        let outcome = self.fetcher.fetch_products().await.map(|products| {
            products
                .into_iter()
                .filter(|p| p.space_category == category)
                .collect()
        });
        self.resolve(token, outcome);
    }

    /// Fetch, then keep products matching the category (when supplied)
    /// and priced within the window (absent bounds are unconstrained).
    pub async fn fetch_by_price_and_category(&self, window: PriceWindow, category: Option<&str>) {
        let token = self.dispatch(FetchKind::ByPriceAndCategory);
        let outcome = self.fetcher.fetch_products().await.map(|products| {
            products
                .into_iter()
                .filter(|p| {
                    category.map_or(true, |c| p.space_category == c) && window.contains(p.price)
                })
                .collect()
        });
        self.resolve(token, outcome);
    }

    /// Whether any fetch operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// The current status notice, if any.
    pub fn notice(&self) -> Option<StoreNotice> {
        self.state.borrow().notice
    }

    /// Replacement counter for the collection; moves on every products
    /// replacement.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    /// Clone of the current collection.
    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    /// Run a closure against the current collection without cloning it.
    pub fn with_products<R>(&self, f: impl FnOnce(&[Product]) -> R) -> R {
        f(&self.state.borrow().products)
    }

    /// Clone of the full state, for consumers that want a snapshot.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    fn dispatch(&self, kind: FetchKind) -> RequestToken {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        tracing::debug!(kind = kind.as_str(), seq, "fetch dispatched");
        self.state.borrow_mut().apply(StoreEvent::Pending { kind });
        RequestToken { kind, seq }
    }

    fn resolve(&self, token: RequestToken, outcome: Result<Vec<Product>, FetchError>) {
        let event = match outcome {
            Ok(products) => {
                tracing::debug!(
                    kind = token.kind.as_str(),
                    seq = token.seq,
                    count = products.len(),
                    "fetch fulfilled"
                );
                StoreEvent::Fulfilled {
                    kind: token.kind,
                    products,
                }
            }
            Err(error) => {
                tracing::warn!(
                    kind = token.kind.as_str(),
                    seq = token.seq,
                    %error,
                    "fetch rejected"
                );
                StoreEvent::Rejected { kind: token.kind }
            }
        };
        self.state.borrow_mut().apply(event);
    }
}
