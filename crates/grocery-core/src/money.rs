//! # Money Module
//!
//! Presentation-side money: the `Money` type used by the receipt printer to
//! render amounts.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart math is plain f64 end to end:                                     │
//! │    line total, raw total, discounted total, tax                        │
//! │                                                                         │
//! │  Only when a value is PRINTED is it rounded to cents:                  │
//! │    1.005          ──► "1.005"          ──► "$1.01"                     │
//! │    0.126          ──► "0.126"          ──► "$0.13"                     │
//! │    1234567890.12  ──► "1234567890.12"  ──► "$1234567890.12"            │
//! │                                                                         │
//! │  Display never consults the host locale: the decimal separator is      │
//! │  always '.', so receipts are byte-identical everywhere.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::money::Money;
//!
//! let total = Money::from_amount(4.0).unwrap();
//! assert_eq!(total, Money::from_cents(400));
//! assert_eq!(total.to_string(), "$4.00");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// A monetary value rounded to whole cents.
///
/// ## Design Decisions
/// - **Decimal, not i64 cents**: no overflow for any amount a receipt can
///   reasonably carry, and no binary rounding error in the cents digits
/// - **Signed**: out-of-range discounts can drive totals negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Rounds a floating-point amount to the nearest cent.
    ///
    /// The rounding works on the shortest decimal string that reads back as
    /// the same `f64`, with halves going away from zero. So `1.005` becomes
    /// `1.01`, and every cent digit of a large amount is kept.
    ///
    /// Returns `None` for NaN, infinities, and magnitudes beyond what a
    /// [`Decimal`] holds (about 7.9e28).
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let exact = Decimal::from_str(&amount.to_string()).ok()?;
        let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // Drops the sign of -0.0 and of tiny negatives.
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        Some(Money(rounded))
    }

    /// The rounded amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Renders `$10.99`, or `-$5.50` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Formats a raw amount for a receipt line.
///
/// Amounts past the [`Decimal`] range are whole numbers in `f64`, so they
/// print exactly with two zero decimals. NaN and infinities print as `$0.00`.
pub fn format_amount(amount: f64) -> String {
    match Money::from_amount(amount) {
        Some(money) => money.to_string(),
        None if amount.is_finite() => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}${:.2}", sign, amount.abs())
        }
        None => Money::zero().to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(amount: f64) -> Money {
        Money::from_amount(amount).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-$0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_from_amount_exact_values() {
        assert_eq!(cents(0.0), Money::zero());
        assert_eq!(cents(1.0), Money::from_cents(100));
        assert_eq!(cents(1.8), Money::from_cents(180));
        assert_eq!(cents(0.1 + 0.2), Money::from_cents(30));
        assert_eq!(cents(1.0).to_string(), "$1.00");
    }

    #[test]
    fn test_from_amount_rounds_half_away_from_zero() {
        assert_eq!(cents(0.125), Money::from_cents(13));
        assert_eq!(cents(1.005), Money::from_cents(101));
        assert_eq!(cents(0.126), Money::from_cents(13));
        assert_eq!(cents(0.124), Money::from_cents(12));
        assert_eq!(cents(-0.125), Money::from_cents(-13));
    }

    #[test]
    fn test_from_amount_keeps_cents_of_large_amounts() {
        assert_eq!(cents(1234567890.12).to_string(), "$1234567890.12");
        assert_eq!(cents(98765432109.99).to_string(), "$98765432109.99");
        assert_eq!(cents(1e17).to_string(), "$100000000000000000.00");
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        assert_eq!(cents(-0.0).to_string(), "$0.00");
        assert_eq!(cents(-0.001).to_string(), "$0.00");
    }

    #[test]
    fn test_from_amount_non_finite_is_none() {
        assert!(Money::from_amount(f64::NAN).is_none());
        assert!(Money::from_amount(f64::INFINITY).is_none());
        assert!(Money::from_amount(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0), "$2.00");
        assert_eq!(format_amount(-5.5), "-$5.50");
        assert_eq!(format_amount(f64::NAN), "$0.00");
        assert_eq!(format_amount(1e30), format!("${:.2}", 1e30));
        assert_eq!(format_amount(-1e30), format!("-${:.2}", 1e30));
    }
}
