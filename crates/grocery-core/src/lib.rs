//! # grocery-core: Checkout Pipeline
//!
//! Cart composition, discount application, tax calculation and receipt
//! formatting as plain synchronous values with no I/O of their own.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Pipeline                                │
//! │                                                                         │
//! │   Product ──► CartItem ──► ShoppingCart ──► total()                    │
//! │                               │                │                        │
//! │                               │ Discount ──────┤                        │
//! │                               │                ▼                        │
//! │                               │        total_with_discount()           │
//! │                               │                │                        │
//! │                               │                ▼                        │
//! │                               │        TaxCalculator::calculate_tax    │
//! │                               │                │                        │
//! │                               ▼                ▼                        │
//! │                         ReceiptPrinter::print_receipt_with_tax         │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                               caller's sink (io::Write)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductId, CartItem
//! - [`discount`] - Discount strategies
//! - [`tax`] - TaxCalculator
//! - [`cart`] - ShoppingCart, CartTotals, CartState
//! - [`receipt`] - ReceiptPrinter
//! - [`money`] - Cent-rounded amounts for display
//! - [`error`] - Domain error types
//! - [`validation`] - Constructor input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::{Discount, Product, ReceiptPrinter, ShoppingCart, TaxCalculator};
//!
//! let apple = Product::new("Apple", 0.50)?;
//! let mut cart = ShoppingCart::new();
//! cart.add_item(&apple, 4)?;
//! cart.set_discount(Discount::percentage(0.10));
//!
//! let tax = TaxCalculator::new(0.07).calculate_tax(cart.total_with_discount());
//!
//! let mut printer = ReceiptPrinter::new(Vec::new());
//! printer.print_receipt_with_tax(&cart, tax)?;
//! # Ok::<(), grocery_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartState, CartTotals, ShoppingCart};
pub use discount::Discount;
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::{format_amount, Money};
pub use receipt::ReceiptPrinter;
pub use tax::TaxCalculator;
pub use types::*;
