//! The visible-subset predicate.

use crate::filter::bounds::CategoryToggles;
use crate::filter::range::CurrentRange;
use crate::product::Product;

/// Compute the visible subset of a collection.
///
/// A product is visible iff its price lies within `[range.low,
/// range.high]` and its category is currently included. Categories
/// absent from the map are excluded. Output order is input order.
///
/// An inverted range (low > high) admits no price and yields an empty
/// result; that is the inherited contract for non-monotonic slider
/// input, not an error.
pub fn visible<'a>(
    products: &'a [Product],
    range: &CurrentRange,
    toggles: &CategoryToggles,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| {
            product.price >= range.low
                && product.price <= range.high
                && toggles.is_included(&product.space_category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::bounds;
    use crate::product::ProductIdx;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Low orbit tour", 10.0, "A"),
            Product::new(2, "Lunar flyby", 50.0, "B"),
            Product::new(3, "Suborbital hop", 25.0, "A"),
        ]
    }

    fn idxs(products: &[&Product]) -> Vec<ProductIdx> {
        products.iter().map(|p| p.idx).collect()
    }

    #[test]
    fn test_full_range_all_included() {
        let products = sample();
        let (bounds, toggles) = bounds::derive(&products);
        let range = CurrentRange::from(bounds);
        assert_eq!(visible(&products, &range, &toggles).len(), 3);
    }

    #[test]
    fn test_price_range_narrows() {
        let products = sample();
        let (_, toggles) = bounds::derive(&products);
        let range = CurrentRange { low: 0.0, high: 30.0 };
        assert_eq!(
            idxs(&visible(&products, &range, &toggles)),
            vec![ProductIdx::new(1), ProductIdx::new(3)]
        );
    }

    #[test]
    fn test_excluded_category_filtered_out() {
        let products = sample();
        let (bounds, mut toggles) = bounds::derive(&products);
        toggles.toggle("A");
        let range = CurrentRange::from(bounds);
        assert_eq!(
            idxs(&visible(&products, &range, &toggles)),
            vec![ProductIdx::new(2)]
        );
    }

    #[test]
    fn test_widening_never_removes() {
        let products = sample();
        let (_, toggles) = bounds::derive(&products);

        let narrow = CurrentRange { low: 20.0, high: 30.0 };
        let wide = CurrentRange { low: 10.0, high: 50.0 };

        let narrow_set = idxs(&visible(&products, &narrow, &toggles));
        let wide_set = idxs(&visible(&products, &wide, &toggles));
        for idx in narrow_set {
            assert!(wide_set.contains(&idx));
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let products = sample();
        let (_, toggles) = bounds::derive(&products);
        let range = CurrentRange { low: 40.0, high: 20.0 };
        assert!(visible(&products, &range, &toggles).is_empty());
    }

    #[test]
    fn test_absent_category_excluded() {
        let products = sample();
        let range = CurrentRange { low: 0.0, high: 100.0 };
        // Toggles derived from a different (empty) collection: every
        // product's category is absent, so nothing is visible.
        let toggles = CategoryToggles::new();
        assert!(visible(&products, &range, &toggles).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let products = vec![
            Product::new(9, "Ninth", 30.0, "A"),
            Product::new(1, "First", 20.0, "A"),
            Product::new(5, "Fifth", 10.0, "A"),
        ];
        let (bounds, toggles) = bounds::derive(&products);
        let range = CurrentRange::from(bounds);
        assert_eq!(
            idxs(&visible(&products, &range, &toggles)),
            vec![ProductIdx::new(9), ProductIdx::new(1), ProductIdx::new(5)]
        );
    }
}
