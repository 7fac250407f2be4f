//! The catalog view: store plus derived filter state.
//!
//! This is the composition root the presentation layer talks to. It
//! owns the store, the derived price bounds, the category toggles, and
//! the current range, and re-derives all three whenever the store's
//! collection has been replaced since the last synchronization.

use crate::fetch::ProductFetcher;
use crate::filter::{self, CategoryToggles, CurrentRange, PriceBounds, PriceWindow};
use crate::product::Product;
use crate::store::{CatalogStore, StoreNotice};

/// A product catalog view with price-range and category filtering.
pub struct CatalogView<F> {
    store: CatalogStore<F>,
    bounds: PriceBounds,
    toggles: CategoryToggles,
    range: CurrentRange,
    seen_revision: u64,
}

impl<F: ProductFetcher> CatalogView<F> {
    /// Create a view over a product fetcher. Call [`CatalogView::load`]
    /// to populate it.
    pub fn new(fetcher: F) -> Self {
        Self {
            store: CatalogStore::new(fetcher),
            bounds: PriceBounds::empty(),
            toggles: CategoryToggles::new(),
            range: CurrentRange::default(),
            seen_revision: 0,
        }
    }

    /// Fetch the unconditional collection and derive filter defaults.
    pub async fn load(&mut self) {
        self.store.fetch_all().await;
        self.sync();
    }

    /// Fetch narrowed by price, then re-derive.
    pub async fn load_by_price(&mut self, min_price: f64, max_price: f64) {
        self.store.fetch_by_price(min_price, max_price).await;
        self.sync();
    }

    /// Fetch narrowed by category, then re-derive.
    pub async fn load_by_category(&mut self, category: &str) {
        self.store.fetch_by_category(category).await;
        self.sync();
    }

    /// Fetch narrowed by both, then re-derive.
    pub async fn load_by_price_and_category(
        &mut self,
        window: PriceWindow,
        category: Option<&str>,
    ) {
        self.store
            .fetch_by_price_and_category(window, category)
            .await;
        self.sync();
    }

    /// Re-derive bounds, toggles, and range if the store's collection
    /// was replaced since the last sync. Safe to call redundantly.
    pub fn sync(&mut self) {
        let revision = self.store.revision();
        if revision == self.seen_revision {
            return;
        }
        let (bounds, toggles) = self.store.with_products(filter::derive);
        self.bounds = bounds;
        self.toggles = toggles;
        self.range = CurrentRange::from(bounds);
        self.seen_revision = revision;
    }

    /// Slider handler: denormalize 0–100 positions against the current
    /// bounds into the absolute price range.
    pub fn on_slide_price(&mut self, slider_low: f64, slider_high: f64) {
        self.range = filter::denormalize(slider_low, slider_high, &self.bounds);
    }

    /// Tag handler: flip one category's inclusion flag.
    pub fn on_toggle_category(&mut self, key: &str) {
        self.toggles.toggle(key);
    }

    /// The visible subset under the current range and toggles, in fetch
    /// order.
    pub fn visible(&self) -> Vec<Product> {
        self.store.with_products(|products| {
            filter::visible(products, &self.range, &self.toggles)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// The current status notice, if any.
    pub fn notice(&self) -> Option<StoreNotice> {
        self.store.notice()
    }

    /// The derived default price window.
    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// The user-selected absolute price range.
    pub fn range(&self) -> CurrentRange {
        self.range
    }

    /// Category labels with inclusion flags, first-seen order.
    pub fn categories(&self) -> Vec<(String, bool)> {
        self.toggles
            .iter()
            .map(|(key, included)| (key.to_string(), included))
            .collect()
    }

    /// The underlying store, for consumers that drive fetches directly.
    pub fn store(&self) -> &CatalogStore<F> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::fetch::FetchError;
    use crate::product::ProductIdx;

    struct QueuedFetcher {
        outcomes: RefCell<VecDeque<Result<Vec<Product>, FetchError>>>,
    }

    impl QueuedFetcher {
        fn new(outcomes: Vec<Result<Vec<Product>, FetchError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ProductFetcher for QueuedFetcher {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("fetch beyond script")
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Low orbit tour", 10.0, "A"),
            Product::new(2, "Lunar flyby", 50.0, "B"),
        ]
    }

    fn idxs(products: &[Product]) -> Vec<ProductIdx> {
        products.iter().map(|p| p.idx).collect()
    }

    #[tokio::test]
    async fn test_load_derives_defaults_and_shows_all() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        assert_eq!(view.bounds(), PriceBounds { min: 0.0, max: 50.0 });
        assert_eq!(
            view.categories(),
            vec![("A".to_string(), true), ("B".to_string(), true)]
        );
        assert_eq!(view.range(), CurrentRange { low: 0.0, high: 50.0 });
        assert_eq!(idxs(&view.visible()), vec![ProductIdx::new(1), ProductIdx::new(2)]);
    }

    #[tokio::test]
    async fn test_full_slider_span_keeps_everything_visible() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        view.on_slide_price(0.0, 100.0);
        assert_eq!(view.range(), CurrentRange { low: 0.0, high: 50.0 });
        assert_eq!(view.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_hides_category() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        view.on_toggle_category("B");
        assert_eq!(idxs(&view.visible()), vec![ProductIdx::new(1)]);

        view.on_toggle_category("B");
        assert_eq!(view.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_slider_narrows_visible() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        // 50% of max 50 floors to 25: only the cheap product remains.
        view.on_slide_price(0.0, 50.0);
        assert_eq!(view.range(), CurrentRange { low: 0.0, high: 25.0 });
        assert_eq!(idxs(&view.visible()), vec![ProductIdx::new(1)]);
    }

    #[tokio::test]
    async fn test_inverted_slider_yields_empty() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        view.on_slide_price(90.0, 10.0);
        assert!(view.visible().is_empty());
    }

    #[tokio::test]
    async fn test_reload_rederives_and_resets_interactions() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![
            Ok(sample()),
            Ok(vec![Product::new(3, "Station week", 900.0, "C")]),
        ]));
        view.load().await;
        view.on_toggle_category("A");
        view.on_slide_price(0.0, 10.0);

        view.load().await;
        assert_eq!(view.bounds(), PriceBounds { min: 0.0, max: 900.0 });
        assert_eq!(view.categories(), vec![("C".to_string(), true)]);
        assert_eq!(view.range(), CurrentRange { low: 0.0, high: 900.0 });
        assert_eq!(idxs(&view.visible()), vec![ProductIdx::new(3)]);
    }

    #[tokio::test]
    async fn test_sync_is_idempotent_without_replacement() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![Ok(sample())]));
        view.load().await;

        // User interaction between syncs must survive a redundant sync.
        view.on_toggle_category("B");
        view.sync();
        assert_eq!(idxs(&view.visible()), vec![ProductIdx::new(1)]);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_prior_derivation() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![
            Ok(sample()),
            Err(FetchError::Request("boom".to_string())),
        ]));
        view.load().await;
        view.load().await;

        // The unconditional fetch failed, so products (and therefore the
        // derived defaults) are unchanged, and the notice is the hard
        // failure message.
        assert_eq!(view.notice(), Some(StoreNotice::ListUnavailable));
        assert_eq!(view.bounds(), PriceBounds { min: 0.0, max: 50.0 });
        assert_eq!(view.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_filtered_load_empty_result() {
        let mut view = CatalogView::new(QueuedFetcher::new(vec![
            Ok(sample()),
            Ok(sample()),
        ]));
        view.load().await;
        view.load_by_price(20.0, 20.0).await;

        assert_eq!(view.notice(), Some(StoreNotice::NoResults));
        assert!(view.visible().is_empty());
        assert_eq!(view.bounds(), PriceBounds::empty());
    }
}
