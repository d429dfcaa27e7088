//! # Validation Module
//!
//! Input validation utilities for Shopfront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Type system (Rust)                                        │
//! │  ├── Amounts are integers, prices are cents                         │
//! │  └── Filter state is a tagged enum, not a sentinel string           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - boundary checks                             │
//! │  ├── Basket amounts must be positive                                │
//! │  └── Filter patterns are bounded before regex compilation           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_amount, validate_filter_pattern};
//!
//! // Validate quantity before a basket operation
//! validate_amount(5).unwrap();
//!
//! // Validate (and trim) a filter pattern before compiling it
//! let pattern = validate_filter_pattern("  ski ").unwrap();
//! assert_eq!(pattern, "ski");
//! ```

use crate::error::ValidationError;
use crate::MAX_FILTER_PATTERN_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a basket amount.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Basket lines never store a zero or negative amount; rejecting the input
/// here keeps that invariant out of every call site.
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog filter pattern.
///
/// ## Rules
/// - Can be empty (an empty pattern matches every name)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed pattern string.
pub fn validate_filter_pattern(pattern: &str) -> ValidationResult<String> {
    let pattern = pattern.trim();

    if pattern.chars().count() > MAX_FILTER_PATTERN_LEN {
        return Err(ValidationError::TooLong {
            field: "pattern".to_string(),
            max: MAX_FILTER_PATTERN_LEN,
        });
    }

    Ok(pattern.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
