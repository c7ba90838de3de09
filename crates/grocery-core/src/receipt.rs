//! # Receipt Printer
//!
//! Renders a cart, plus optional tax, as line-oriented text into a
//! caller-supplied sink.
//!
//! ## Output Layout
//! ```text
//! Receipt:
//! Apple x4: $2.00                 one line per item, cart order
//! Milk x2: $3.00
//! Total: $5.00
//! Discounted Total: $4.50         only when strictly below Total
//! Tax: $0.32                      only when tax > 0
//! Final Total: $4.82              only when tax > 0
//! ```
//!
//! Every line ends in `\n`. Amounts go through [`format_amount`], so the decimal
//! separator is always `.` whatever the host locale.
//!
//! ## Sink Failures
//! Each line is written straight to the sink with no buffering of our own.
//! The first rejected write aborts the call with [`CoreError::Io`]; lines
//! already written stay written.

use std::io::Write;

use tracing::trace;

use crate::cart::ShoppingCart;
use crate::error::CoreResult;
use crate::money::format_amount;

/// Writes receipts to `W`.
///
/// ## Example
/// ```rust
/// use grocery_core::{Product, ReceiptPrinter, ShoppingCart};
///
/// let apple = Product::new("Apple", 0.50).unwrap();
/// let mut cart = ShoppingCart::new();
/// cart.add_item(&apple, 2).unwrap();
///
/// let mut printer = ReceiptPrinter::new(Vec::new());
/// printer.print_receipt(&cart).unwrap();
///
/// let text = String::from_utf8(printer.into_inner()).unwrap();
/// assert_eq!(text, "Receipt:\nApple x2: $1.00\nTotal: $1.00\n");
/// ```
#[derive(Debug)]
pub struct ReceiptPrinter<W> {
    out: W,
}

impl<W: Write> ReceiptPrinter<W> {
    pub fn new(out: W) -> Self {
        ReceiptPrinter { out }
    }

    /// Prints a receipt with no tax section.
    pub fn print_receipt(&mut self, cart: &ShoppingCart) -> CoreResult<()> {
        self.print_receipt_with_tax(cart, 0.0)
    }

    /// Prints a receipt; the tax lines appear only when `tax > 0`.
    pub fn print_receipt_with_tax(&mut self, cart: &ShoppingCart, tax: f64) -> CoreResult<()> {
        trace!(lines = cart.item_count(), tax, "Printing receipt");

        writeln!(self.out, "Receipt:")?;
        for item in cart.iter() {
            writeln!(
                self.out,
                "{} x{}: {}",
                item.product().name(),
                item.quantity(),
                format_amount(item.total_price())
            )?;
        }

        let total = cart.total();
        let discounted = cart.total_with_discount();
        writeln!(self.out, "Total: {}", format_amount(total))?;
        if discounted < total {
            writeln!(self.out, "Discounted Total: {}", format_amount(discounted))?;
        }
        if tax > 0.0 {
            writeln!(self.out, "Tax: {}", format_amount(tax))?;
            writeln!(self.out, "Final Total: {}", format_amount(discounted + tax))?;
        }

        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Hands the sink back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
