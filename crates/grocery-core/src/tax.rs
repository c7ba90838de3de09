//! # Tax Calculation
//!
//! Rate-based tax on an amount, typically the cart's discounted total.
//!
//! ## User Workflow
//! ```text
//! Discounted Total: $1.80
//!      │
//!      ▼
//! TaxCalculator::new(0.07).calculate_tax(1.80)
//!      │
//!      ▼
//! Tax: 0.126 (printed as $0.13)
//! ```
//!
//! No rounding happens here; the receipt printer rounds for display.
//! Negative rates and amounts are not rejected.

use serde::{Deserialize, Serialize};

/// Immutable tax calculator, reusable across computations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxCalculator {
    tax_rate: f64,
}

impl TaxCalculator {
    /// Creates a calculator from a fraction (0.07 = 7%).
    #[inline]
    pub const fn new(tax_rate: f64) -> Self {
        TaxCalculator { tax_rate }
    }

    /// Creates a calculator from a percentage (7.0 = 7%).
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::TaxCalculator;
    ///
    /// let calc = TaxCalculator::from_percentage(7.0);
    /// assert!((calc.rate() - 0.07).abs() < 1e-12);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        TaxCalculator::new(pct / 100.0)
    }

    #[inline]
    pub const fn rate(&self) -> f64 {
        self.tax_rate
    }

    /// Returns `amount × rate`.
    #[inline]
    pub fn calculate_tax(&self, amount: f64) -> f64 {
        amount * self.tax_rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
