//! # Basket Module
//!
//! The shopping basket: quantity-aware lines keyed by product id.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Basket Operations                              │
//! │                                                                     │
//! │  Caller Action            Basket Change                             │
//! │  ─────────────            ─────────────                             │
//! │                                                                     │
//! │  add(product, n) ───────► existing line: amount += n                │
//! │                           otherwise: push snapshot line             │
//! │                                                                     │
//! │  remove(product, n) ────► amount - n > 0: amount -= n               │
//! │                           otherwise: line deleted                   │
//! │                                                                     │
//! │  clear() ───────────────► lines emptied                             │
//! │                                                                     │
//! │  remove_unavailable() ──► lines with available == false dropped     │
//! │                                                                     │
//! │  total_amount() ────────► Σ amount          (read only)             │
//! │  total_sum() ───────────► Σ amount × price  (read only)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, Size};
use crate::validation::validate_amount;

// =============================================================================
// Basket Line
// =============================================================================

/// A line in the shopping basket.
///
/// ## Design Notes
/// - Holds a frozen copy of the product's attributes at add-time, not a live
///   reference. Later changes to the original product's price or availability
///   do not retroactively change a line already created.
/// - `amount` is always positive while the line is stored; an amount driven
///   to zero or below deletes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketLine {
    /// Id of the product this line was built from.
    pub product_id: u64,

    /// Product name at add-time (frozen).
    pub name: String,

    /// Product description at add-time (frozen).
    pub description: String,

    /// Product sizes at add-time (frozen).
    pub sizes: Vec<Size>,

    /// Price in cents at add-time (frozen).
    /// This is critical: we lock in the price when the line is created.
    pub unit_price_cents: i64,

    /// Availability at add-time (frozen); `remove_unavailable` reads this,
    /// never the live product.
    pub available: bool,

    /// Quantity in the basket.
    pub amount: i64,

    /// When this line was created.
    pub added_at: DateTime<Utc>,
}

impl BasketLine {
    /// Creates a basket line from a product and amount.
    ///
    /// ## Attribute Freezing
    /// The product's attributes are captured at this moment. If the product
    /// changes afterwards, this line retains the original values.
    pub fn from_product(product: &Product, amount: i64) -> Self {
        BasketLine {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            sizes: product.sizes.clone(),
            unit_price_cents: product.price_cents,
            available: product.available,
            amount,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total (unit price × amount) as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.amount)
    }
}

// =============================================================================
// Basket
// =============================================================================

/// The shopping basket.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product increments
///   the existing line's amount)
/// - Every stored amount is > 0 (a removal that reaches zero deletes the
///   line; it is never stored as zero)
/// - The line collection is only reachable through basket methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Lines in the basket, in add order.
    lines: Vec<BasketLine>,

    /// When the basket was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Basket {
    /// Creates a basket containing one line built from the seed product.
    ///
    /// ## Errors
    /// Rejects a non-positive `amount`, like every operation that takes one.
    pub fn new(seed: &Product, amount: i64) -> CoreResult<Self> {
        validate_amount(amount)?;

        Ok(Basket {
            lines: vec![BasketLine::from_product(seed, amount)],
            created_at: Utc::now(),
        })
    }

    /// Adds a product to the basket.
    ///
    /// ## Behavior
    /// - If a line with the product's id exists: its amount is incremented
    ///   (no upper cap)
    /// - Otherwise: a new snapshot line is appended
    ///
    /// ## Errors
    /// Rejects a non-positive `amount`.
    pub fn add(&mut self, product: &Product, amount: i64) -> CoreResult<()> {
        validate_amount(amount)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.amount += amount;
            return Ok(());
        }

        self.lines.push(BasketLine::from_product(product, amount));
        Ok(())
    }

    /// Decrements a product's amount, deleting the line when it is used up.
    ///
    /// ## Behavior
    /// - `current − amount > 0`: the line's amount is decremented in place
    /// - Otherwise: the line is deleted entirely — removing exactly the full
    ///   amount or more than the full amount both delete it, so a stored
    ///   amount never reaches zero or below
    ///
    /// ## Errors
    /// - [`CoreError::LineNotFound`] if no line holds the product's id
    /// - Rejects a non-positive `amount`
    pub fn remove(&mut self, product: &Product, amount: i64) -> CoreResult<()> {
        validate_amount(amount)?;

        let index = self
            .lines
            .iter()
            .position(|line| line.product_id == product.id)
            .ok_or(CoreError::LineNotFound(product.id))?;

        if self.lines[index].amount - amount > 0 {
            self.lines[index].amount -= amount;
        } else {
            self.lines.remove(index);
        }

        Ok(())
    }

    /// Returns the total quantity across all lines. 0 for an empty basket.
    pub fn total_amount(&self) -> i64 {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Returns the total cost across all lines (Σ amount × unit price).
    /// Zero for an empty basket.
    pub fn total_sum(&self) -> Money {
        self.lines.iter().map(BasketLine::line_total).sum()
    }

    /// Clears all lines from the basket.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Drops every line whose frozen `available` flag is false and returns
    /// the surviving lines.
    ///
    /// Availability is the value captured when the line was created, not a
    /// live lookup against the original product.
    pub fn remove_unavailable(&mut self) -> &[BasketLine] {
        self.lines.retain(|line| line.available);
        &self.lines
    }

    /// Returns the lines in add order.
    #[inline]
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Returns the number of lines in the basket.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the basket holds no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the basket was created or last cleared.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
