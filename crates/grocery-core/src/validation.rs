//! # Validation Module
//!
//! Constructor input checks for the checkout pipeline.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new(name, price)                                              │
//! │  ├── validate_product_name   blank name  → Required                    │
//! │  └── validate_price          price < 0   → Negative                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  CartItem::new(product, quantity)                                       │
//! │  └── validate_quantity       qty <= 0    → MustBePositive              │
//! │                                                                         │
//! │  Discount and TaxCalculator parameters are NOT validated: out-of-range  │
//! │  percentages and negative rates are the caller's responsibility.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_price(0.50).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a product name.
///
/// ## Rules
/// - Must contain at least one non-whitespace character
///
/// The name itself is stored as given; only the check is done on the
/// trimmed form.
///
/// ## Example
/// ```rust
/// use grocery_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Apple").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - NaN is rejected since it is not `>= 0`
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a cart item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
