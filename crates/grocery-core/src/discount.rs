//! # Discount Strategies
//!
//! A closed set of pricing adjustments applied to a cart's raw total.
//!
//! ```text
//! raw total ──► Discount::apply ──► discounted total
//!
//!   NoDiscount          t ──► t
//!   Percentage(p)       t ──► t × (1 − p)
//! ```
//!
//! A cart holds exactly one strategy at a time; setting a new one replaces
//! the old one, strategies never stack.
//!
//! ## Unvalidated Percentages
//! `Percentage` accepts any value. `p > 1` yields a negative total and
//! `p < 0` yields a total above the original. Keeping `p` in `[0, 1]` is the
//! caller's job.

use serde::{Deserialize, Serialize};

/// Pricing adjustment applied to a running total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// Identity: the total is left untouched.
    #[default]
    NoDiscount,

    /// Scales the total by `1 - percent`; `percent` is a fraction (0.10 = 10%).
    Percentage { percent: f64 },
}

impl Discount {
    /// Shorthand for [`Discount::Percentage`].
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::Discount;
    ///
    /// let ten_off = Discount::percentage(0.10);
    /// assert!((ten_off.apply(100.0) - 90.0).abs() < 1e-9);
    /// ```
    pub const fn percentage(percent: f64) -> Self {
        Discount::Percentage { percent }
    }

    /// Applies the adjustment.
    ///
    /// Pure arithmetic: negative or NaN totals pass straight through.
    pub fn apply(&self, total: f64) -> f64 {
        match self {
            Discount::NoDiscount => total,
            Discount::Percentage { percent } => total * (1.0 - percent),
        }
    }

    /// The configured fraction, or `0.0` for [`Discount::NoDiscount`].
    pub fn percent(&self) -> f64 {
        match self {
            Discount::NoDiscount => 0.0,
            Discount::Percentage { percent } => *percent,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
