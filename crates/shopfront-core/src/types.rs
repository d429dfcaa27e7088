//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐      ┌─────────────────┐                      │
//! │  │    Product      │      │      Size       │                      │
//! │  │  ─────────────  │      │  ─────────────  │                      │
//! │  │  id (u64)       │      │  Numeric(u32)   │                      │
//! │  │  name           │      │  Label(String)  │                      │
//! │  │  description    │      │                 │                      │
//! │  │  sizes          │──────►  210 / "blue"   │                      │
//! │  │  price_cents    │      └─────────────────┘                      │
//! │  │  available      │                                               │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products carry a plain integer `id`. It is the caller's responsibility to
//! keep ids unique within any catalog that holds them; construction performs
//! no validation (callers are trusted).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Size
// =============================================================================

/// A size label on a product.
///
/// Size charts mix numeric sizes (ski lengths, shoe sizes) with textual ones
/// (wax colors, S/M/L). The untagged serde representation encodes numeric
/// sizes as JSON numbers and textual sizes as JSON strings, so a size list
/// round-trips as e.g. `[210, 220, 230]` or `["blue", "yellow", "red"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Size {
    /// A numeric size, e.g. a length in centimeters.
    Numeric(u32),
    /// A textual size label, e.g. a color or "XL".
    Label(String),
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Numeric(n) => write!(f, "{}", n),
            Size::Label(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Lifecycle
/// Created once from literal data; only `available` is meant to change
/// afterwards (via [`Product::set_available`]). Products are never destroyed,
/// only removed from the collections that hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within a catalog.
    pub id: u64,

    /// Display name shown to the customer; the catalog filter matches on it.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Available sizes, in chart order.
    pub sizes: Vec<Size>,

    /// Price in cents (smallest currency unit). Non-negative by convention.
    pub price_cents: i64,

    /// Whether the product can currently be sold.
    pub available: bool,
}

impl Product {
    /// Creates a product with all fields set as given.
    ///
    /// No validation is performed; callers are trusted to supply a unique id
    /// and a non-negative price.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Vec<Size>,
        price_cents: i64,
        available: bool,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            description: description.into(),
            sizes,
            price_cents,
            available,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Toggles whether the product can be sold. No other effect.
    #[inline]
    pub fn set_available(&mut self, value: bool) {
        self.available = value;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_available() {
        let mut product = Product::new(1, "Blue skis", "For gliding over snow", vec![], 512, true);
        assert!(product.available);

        product.set_available(false);
        assert!(!product.available);

        product.set_available(true);
        assert!(product.available);
    }

    #[test]
    fn test_price_accessor() {
        let product = Product::new(22, "Red skis", "For gliding over snow", vec![], 533, true);
        assert_eq!(product.price(), Money::from_cents(533));
        assert_eq!(product.price().to_string(), "$5.33");
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Size::Numeric(210).to_string(), "210");
        assert_eq!(Size::Label("blue".to_string()).to_string(), "blue");
    }

    /// The untagged Size encoding is part of the crate's JSON contract:
    /// numeric sizes must serialize as numbers, textual ones as strings.
    #[test]
    fn test_product_json_shape() {
        let product = Product::new(
            8,
            "Sliding wax",
            "For waxing skis",
            vec![
                Size::Label("blue".to_string()),
                Size::Label("yellow".to_string()),
            ],
            97,
            true,
        );

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 8,
                "name": "Sliding wax",
                "description": "For waxing skis",
                "sizes": ["blue", "yellow"],
                "price_cents": 97,
                "available": true,
            })
        );

        let numeric = Product::new(1, "Blue skis", "", vec![Size::Numeric(210)], 512, true);
        assert_eq!(
            serde_json::to_value(&numeric).unwrap()["sizes"],
            serde_json::json!([210])
        );
    }
}
