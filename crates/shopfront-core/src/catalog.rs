//! # Catalog Module
//!
//! The product catalog: an ordered product collection plus the query state
//! (name filter, price sort) used to produce customer-facing listings.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Catalog::query()                               │
//! │                                                                     │
//! │  stored products (insertion order)                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  keep available == true          ◄── always applied                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  apply NameFilter                ◄── All passes everything,         │
//! │       │                              Pattern matches on name        │
//! │       ▼                                                             │
//! │  stable sort by price_cents      ◄── only if sorting enabled;       │
//! │       │                              ties keep insertion order      │
//! │       ▼                                                             │
//! │  Vec<Product> snapshot                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Query state affects only subsequent queries, never the stored products.

use regex::RegexBuilder;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_filter_pattern;
use crate::WILDCARD_FILTER;

// =============================================================================
// Name Filter
// =============================================================================

/// The active name filter of a catalog.
///
/// An explicit tagged value instead of a nullable pattern: there is no
/// "unset" state to special-case, and the wildcard is a variant rather than
/// a magic string tested against a compiled regex.
#[derive(Debug, Clone, Default)]
pub enum NameFilter {
    /// Matches every product regardless of name. This is the default: a
    /// freshly constructed catalog lists all available products.
    #[default]
    All,

    /// Matches products whose name contains the pattern
    /// (case-insensitive regex search).
    Pattern(regex::Regex),
}

impl NameFilter {
    /// Checks whether a product name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::All => true,
            NameFilter::Pattern(regex) => regex.is_match(name),
        }
    }

    /// Checks if this is the wildcard filter.
    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, NameFilter::All)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A product catalog.
///
/// ## Invariants
/// - Stored products keep insertion order; duplicates by id are permitted by
///   construction but not meaningful
/// - A query result never contains unavailable products
/// - The product collection is only reachable through catalog methods
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products in insertion order.
    products: Vec<Product>,

    /// Active name filter, applied by `query`.
    filter: NameFilter,

    /// Whether `query` sorts its result by price.
    sort_by_price: bool,

    /// Sort direction when sorting is enabled (true = ascending).
    sort_ascending: bool,
}

impl Catalog {
    /// Creates a catalog containing exactly the seed product.
    ///
    /// The filter starts as [`NameFilter::All`], so an unfiltered catalog
    /// lists every available product.
    pub fn new(seed: Product, sort_by_price: bool, sort_ascending: bool) -> Self {
        Catalog {
            products: vec![seed],
            filter: NameFilter::All,
            sort_by_price,
            sort_ascending,
        }
    }

    /// Appends products to the catalog, preserving input order.
    ///
    /// No dedup is performed; adding a product with an id already present
    /// stores a second copy.
    pub fn add_many(&mut self, products: impl IntoIterator<Item = Product>) {
        self.products.extend(products);
    }

    /// Sets the active name filter from a pattern string.
    ///
    /// ## Behavior
    /// - The wildcard token [`WILDCARD_FILTER`] (ASCII case-insensitive)
    ///   selects [`NameFilter::All`]
    /// - Any other pattern is trimmed, length-checked, and compiled as a
    ///   case-insensitive regex
    /// - On failure the active filter is LEFT UNCHANGED
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Catalog, Product};
    ///
    /// let mut catalog = Catalog::new(Product::new(1, "Blue skis", "", vec![], 512, true), false, true);
    ///
    /// catalog.set_filter("SKI").unwrap();
    /// assert_eq!(catalog.query().len(), 1);
    ///
    /// // Malformed patterns are rejected; the previous filter stays active.
    /// assert!(catalog.set_filter("ski(").is_err());
    /// assert_eq!(catalog.query().len(), 1);
    /// ```
    pub fn set_filter(&mut self, pattern: &str) -> CoreResult<()> {
        let pattern = validate_filter_pattern(pattern)?;

        if pattern.eq_ignore_ascii_case(WILDCARD_FILTER) {
            self.filter = NameFilter::All;
            return Ok(());
        }

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| CoreError::InvalidFilterPattern {
                pattern: pattern.clone(),
                reason: err.to_string(),
            })?;

        self.filter = NameFilter::Pattern(regex);
        Ok(())
    }

    /// Enables or disables sorting by price.
    #[inline]
    pub fn set_sort_by_price(&mut self, enabled: bool) {
        self.sort_by_price = enabled;
    }

    /// Sets the sort direction (true = ascending by price).
    #[inline]
    pub fn set_sort_ascending(&mut self, ascending: bool) {
        self.sort_ascending = ascending;
    }

    /// Returns the active name filter.
    #[inline]
    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// Returns the products that are available AND pass the active filter,
    /// sorted by price when sorting is enabled.
    ///
    /// The sort is stable: products with equal prices keep their insertion
    /// order. Sorting disabled returns insertion order. The result is a
    /// snapshot; stored products are never mutated.
    pub fn query(&self) -> Vec<Product> {
        let mut result: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.available && self.filter.matches(&product.name))
            .cloned()
            .collect();

        if self.sort_by_price {
            if self.sort_ascending {
                result.sort_by(|a, b| a.price_cents.cmp(&b.price_cents));
            } else {
                result.sort_by(|a, b| b.price_cents.cmp(&a.price_cents));
            }
        }

        result
    }

    /// Removes the first product with the given id.
    ///
    /// Absent ids are a no-op: removal means "make sure it is not stored",
    /// and an id that was never added already satisfies that.
    pub fn remove(&mut self, id: u64) {
        if let Some(index) = self.products.iter().position(|product| product.id == id) {
            self.products.remove(index);
        }
    }

    /// Returns the stored products in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of stored products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog stores no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u64, name: &str, price_cents: i64, available: bool) -> Product {
        Product::new(id, name, format!("Product {}", id), vec![], price_cents, available)
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_holds_exactly_the_seed() {
        let catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].id, 1);
    }

    #[test]
    fn test_add_many_preserves_order_and_duplicates() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(1, "Blue skis", 512, true),
        ]);

        assert_eq!(ids(catalog.products()), vec![1, 2, 1]);
    }

    #[test]
    fn test_query_excludes_unavailable() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, false), false, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(11, "Poles", 200, false),
        ]);

        let listed = catalog.query();
        assert!(listed.iter().all(|p| p.available));
        assert_eq!(ids(&listed), vec![2]);
    }

    #[test]
    fn test_default_filter_matches_all_available() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([test_product(2, "Felt boots", 364, true)]);

        // No set_filter call yet: everything available is listed.
        assert_eq!(ids(&catalog.query()), vec![1, 2]);
    }

    #[test]
    fn test_wildcard_bypasses_name_matching() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(11, "Poles", 200, false),
        ]);

        catalog.set_filter("ski").unwrap();
        assert_eq!(ids(&catalog.query()), vec![1]);

        catalog.set_filter("all").unwrap();
        assert!(catalog.filter().is_all());
        assert_eq!(ids(&catalog.query()), vec![1, 2]);

        // The token is recognized case-insensitively.
        catalog.set_filter("ALL").unwrap();
        assert!(catalog.filter().is_all());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring_search() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([
            test_product(22, "Red SKIS", 533, true),
            test_product(2, "Felt boots", 364, true),
        ]);

        catalog.set_filter("Ski").unwrap();
        assert_eq!(ids(&catalog.query()), vec![1, 22]);
    }

    #[test]
    fn test_invalid_pattern_leaves_filter_unchanged() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([test_product(2, "Felt boots", 364, true)]);

        catalog.set_filter("boots").unwrap();
        assert_eq!(ids(&catalog.query()), vec![2]);

        let err = catalog.set_filter("boots(").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilterPattern { .. }));

        // The previous filter is still active.
        assert_eq!(ids(&catalog.query()), vec![2]);
    }

    #[test]
    fn test_overlong_pattern_rejected() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        let err = catalog.set_filter(&"a".repeat(101)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), true, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(22, "Red skis", 533, true),
        ]);

        assert_eq!(ids(&catalog.query()), vec![2, 1, 22]);

        catalog.set_sort_ascending(false);
        assert_eq!(ids(&catalog.query()), vec![22, 1, 2]);

        catalog.set_sort_by_price(false);
        assert_eq!(ids(&catalog.query()), vec![1, 2, 22]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let mut catalog = Catalog::new(test_product(1, "Hat A", 300, true), true, true);
        catalog.add_many([
            test_product(2, "Hat B", 300, true),
            test_product(3, "Hat C", 100, true),
            test_product(4, "Hat D", 300, true),
        ]);

        // Equal prices keep insertion order in both directions.
        assert_eq!(ids(&catalog.query()), vec![3, 1, 2, 4]);

        catalog.set_sort_ascending(false);
        assert_eq!(ids(&catalog.query()), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(1, "Blue skis", 512, true),
        ]);

        catalog.remove(1);
        assert_eq!(ids(catalog.products()), vec![2, 1]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.remove(99);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_query_does_not_mutate_storage() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), true, false);
        catalog.add_many([test_product(2, "Felt boots", 364, true)]);

        let _ = catalog.query();
        assert_eq!(ids(catalog.products()), vec![1, 2]);
    }

    /// Filter "ski" + descending price sort over three products.
    #[test]
    fn test_filtered_sorted_listing() {
        let mut catalog = Catalog::new(test_product(1, "Blue skis", 512, true), false, true);
        catalog.add_many([
            test_product(2, "Felt boots", 364, true),
            test_product(22, "Red skis", 533, true),
        ]);

        catalog.set_filter("ski").unwrap();
        catalog.set_sort_by_price(true);
        catalog.set_sort_ascending(false);

        let listed = catalog.query();
        assert_eq!(ids(&listed), vec![22, 1]);
        assert_eq!(listed[0].price_cents, 533);
        assert_eq!(listed[1].price_cents, 512);
    }
}
