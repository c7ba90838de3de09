//! # Grocery Checkout Demo
//!
//! Runs the checkout pipeline once over a fixed basket and prints the receipt.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Build the basket: Apple ×4, Bread ×1, Milk ×2, then remove the Bread
//! 4. Apply the configured discount and compute tax
//! 5. Print the receipt (text or JSON) to stdout
//!
//! ## Usage
//! ```bash
//! cargo run -p grocery-demo
//! GROCERY_DISCOUNT=0 GROCERY_TAX_RATE=0.25 cargo run -p grocery-demo
//! GROCERY_OUTPUT=json RUST_LOG=grocery=debug cargo run -p grocery-demo
//! ```

mod config;

use std::io::{self, Write};

use anyhow::Context;
use grocery_core::{CartItem, CartTotals, Product, ReceiptPrinter, ShoppingCart};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, OutputFormat};

/// JSON rendering of a finished checkout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptDocument {
    items: Vec<CartItem>,
    totals: CartTotals,
    tax: f64,
    final_total: f64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    info!(
        tax_rate = config.tax_rate,
        discount = config.discount,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&config, &mut handle)?;
    handle.flush().context("flushing stdout")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=grocery=trace` - also show receipt rendering
/// - Default: `info,grocery=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grocery=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the demo basket.
fn build_cart() -> anyhow::Result<ShoppingCart> {
    let apple = Product::new("Apple", 0.50)?;
    let bread = Product::new("Bread", 2.00)?;
    let milk = Product::new("Milk", 1.50)?;

    let mut cart = ShoppingCart::new();
    cart.add_item(&apple, 4)?;
    cart.add_item(&bread, 1)?;
    cart.add_item(&milk, 2)?;

    cart.remove_item(&bread);

    Ok(cart)
}

/// Runs the pipeline and writes the result to `out`.
fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    let mut cart = build_cart()?;
    cart.set_discount(config.discount());

    let discounted_total = cart.total_with_discount();
    let tax = config.tax_calculator().calculate_tax(discounted_total);
    info!(
        lines = cart.item_count(),
        total = cart.total(),
        discounted_total,
        tax,
        "Checkout computed"
    );

    match config.output {
        OutputFormat::Text => {
            ReceiptPrinter::new(out)
                .print_receipt_with_tax(&cart, tax)
                .context("printing receipt")?;
        }
        OutputFormat::Json => {
            let document = ReceiptDocument {
                items: cart.items(),
                totals: CartTotals::from(&cart),
                tax,
                final_total: discounted_total + tax,
            };
            serde_json::to_writer_pretty(&mut *out, &document).context("writing receipt json")?;
            writeln!(out)?;
        }
    }

    Ok(())
}
