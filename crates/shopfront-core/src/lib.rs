//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It models a product catalog with
//! filtering/sorting and a shopping basket with quantity-aware operations, as
//! pure data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  apps/demo (console binary)                   │ │
//! │  │    sample products ──► catalog query ──► basket totals        │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │             ★ shopfront-core (THIS CRATE) ★                   │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────────┐     │ │
//! │  │  │  types  │  │  money  │  │ catalog │  │    basket    │     │ │
//! │  │  │ Product │  │  Money  │  │ Catalog │  │    Basket    │     │ │
//! │  │  │  Size   │  │ (cents) │  │ filter/ │  │  BasketLine  │     │ │
//! │  │  │         │  │         │  │  sort   │  │   totals     │     │ │
//! │  │  └─────────┘  └─────────┘  └─────────┘  └──────────────┘     │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Product`], [`Size`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Product catalog with name filter and price sort
//! - [`basket`] - Shopping basket with quantity-aware lines
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Basket, Catalog, Product};
//!
//! let skis = Product::new(1, "Blue skis", "For gliding over snow", vec![], 512, true);
//!
//! // A catalog starts from a seed product; its query honors filter and sort state.
//! let mut catalog = Catalog::new(skis.clone(), true, false);
//! catalog.set_filter("ski").unwrap();
//! assert_eq!(catalog.query().len(), 1);
//!
//! // A basket keeps one line per product id and aggregates totals.
//! let mut basket = Basket::new(&skis, 2).unwrap();
//! basket.add(&skis, 3).unwrap();
//! assert_eq!(basket.total_amount(), 5);
//! assert_eq!(basket.total_sum().cents(), 5 * 512);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use basket::{Basket, BasketLine};
pub use catalog::{Catalog, NameFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, Size};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Filter token that matches every product regardless of name.
///
/// Passing this to [`Catalog::set_filter`] (ASCII case-insensitive) selects
/// [`NameFilter::All`] instead of compiling a pattern.
pub const WILDCARD_FILTER: &str = "all";

/// Maximum length of a filter pattern, in characters.
///
/// Patterns are user-typed search input; anything longer is rejected before
/// regex compilation is attempted.
pub const MAX_FILTER_PATTERN_LEN: usize = 100;
