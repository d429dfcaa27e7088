//! # Shopfront Demonstration Binary
//!
//! Walks the storefront through one session: assemble a catalog, filter and
//! sort it, print the listing, then run a basket through add/remove/purge and
//! print its totals.
//!
//! ## Script Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Demo Script                                 │
//! │                                                                     │
//! │  1. Initialize Logging ──► tracing-subscriber with env filter       │
//! │                            Default: INFO, override with RUST_LOG    │
//! │                                                                     │
//! │  2. Catalog ─────────────► seed + bulk-add (with one duplicate)     │
//! │                            filter "skis", sort by price descending  │
//! │                            print listing, remove id 7               │
//! │                                                                     │
//! │  3. Basket ──────────────► seed (felt boots × 3)                    │
//! │                            add ×3, remove ×2, purge unavailable     │
//! │                            print total amount and total sum         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod samples;

use shopfront_core::{Basket, Catalog, CoreResult, Product};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> CoreResult<()> {
    init_tracing();
    info!("Starting shopfront demo");

    let products = samples::sample_products();

    // -------------------------------------------------------------------------
    // Catalog: seed, bulk-add (the blue skis go in twice), filter, sort
    // -------------------------------------------------------------------------
    let mut catalog = Catalog::new(products.blue_skis.clone(), false, true);
    catalog.add_many([
        products.felt_boots.clone(),
        products.ushanka_hat.clone(),
        products.sliding_wax.clone(),
        products.poles.clone(),
        products.red_skis.clone(),
        products.blue_skis.clone(),
    ]);
    debug!(stored = catalog.len(), "catalog assembled");

    catalog.set_filter("skis")?;
    catalog.set_sort_by_price(true);
    catalog.set_sort_ascending(false);

    println!("Filtered and sorted catalog:");
    for product in catalog.query() {
        println!("  {}", listing_line(&product));
    }

    catalog.remove(7);
    debug!(stored = catalog.len(), "removed product 7 from catalog");

    // -------------------------------------------------------------------------
    // Basket: seed, add, partial and full removal, purge unavailable
    // -------------------------------------------------------------------------
    let mut basket = Basket::new(&products.felt_boots, 3)?;
    basket.add(&products.felt_boots, 2)?;
    basket.add(&products.sliding_wax, 1)?;
    basket.add(&products.blue_skis, 1)?;
    basket.remove(&products.felt_boots, 4)?;
    basket.remove(&products.felt_boots, 1)?;
    basket.remove_unavailable();
    debug!(lines = basket.line_count(), "basket session finished");

    println!("Items in basket: {}", basket.total_amount());
    println!("Basket total: {}", basket.total_sum());

    Ok(())
}

/// One listing row: id, name, price, and the size chart.
fn listing_line(product: &Product) -> String {
    let sizes = product
        .sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "[{}] {} {} (sizes: {})",
        product.id,
        product.name,
        product.price(),
        sizes
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Show trace for shopfront crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays the demo script and checks the externally observable state:
    /// the catalog listing and the basket aggregates.
    #[test]
    fn test_demo_script_end_state() {
        let products = samples::sample_products();

        let mut catalog = Catalog::new(products.blue_skis.clone(), false, true);
        catalog.add_many([
            products.felt_boots.clone(),
            products.ushanka_hat.clone(),
            products.sliding_wax.clone(),
            products.poles.clone(),
            products.red_skis.clone(),
            products.blue_skis.clone(),
        ]);
        catalog.set_filter("skis").unwrap();
        catalog.set_sort_by_price(true);
        catalog.set_sort_ascending(false);

        // Both blue-ski copies are unavailable, so only the red skis match.
        let listed = catalog.query();
        assert_eq!(
            listed.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![22]
        );

        catalog.remove(7);
        assert_eq!(catalog.len(), 6);
        assert!(catalog.products().iter().all(|p| p.id != 7));

        let mut basket = Basket::new(&products.felt_boots, 3).unwrap();
        basket.add(&products.felt_boots, 2).unwrap();
        basket.add(&products.sliding_wax, 1).unwrap();
        basket.add(&products.blue_skis, 1).unwrap();
        basket.remove(&products.felt_boots, 4).unwrap();
        basket.remove(&products.felt_boots, 1).unwrap();
        basket.remove_unavailable();

        // Only the wax survives: the felt boots were fully removed and the
        // blue skis were snapshotted as unavailable.
        assert_eq!(basket.line_count(), 1);
        assert_eq!(basket.lines()[0].product_id, 8);
        assert_eq!(basket.total_amount(), 1);
        assert_eq!(basket.total_sum().cents(), 97);
    }

    #[test]
    fn test_listing_line_format() {
        let products = samples::sample_products();
        assert_eq!(
            listing_line(&products.red_skis),
            "[22] Red skis $5.33 (sizes: 210, 215, 230)"
        );
    }
}
