//! # Shopping Cart
//!
//! The mutable aggregate of cart lines plus the active discount.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                     State Change                             │
//! │  ─────────                     ────────────                             │
//! │                                                                         │
//! │  add_item(product, qty) ─────► items.push(CartItem)                     │
//! │                                (same product twice = two lines)         │
//! │                                                                         │
//! │  remove_item(product) ───────► first line with that ProductId removed  │
//! │                                (no match = no-op)                       │
//! │                                                                         │
//! │  set_discount(d) ────────────► discount = d  (replaces, never stacks)  │
//! │                                                                         │
//! │  items() ────────────────────► owned copy; editing it never touches    │
//! │                                the cart                                 │
//! │                                                                         │
//! │  total() ────────────────────► Σ line totals (0.0 when empty)          │
//! │  total_with_discount() ──────► discount.apply(total())                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `ShoppingCart` has no internal locking. Callers that share a cart across
//! threads wrap it in [`CartState`].

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discount::Discount;
use crate::error::ValidationResult;
use crate::types::{CartItem, Product};

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order
/// - `total() == Σ item.total_price()`
/// - `total_with_discount() == discount.apply(total())`
///
/// ## Example
/// ```rust
/// use grocery_core::{Discount, Product, ShoppingCart};
///
/// let apple = Product::new("Apple", 0.50).unwrap();
/// let bread = Product::new("Bread", 2.00).unwrap();
///
/// let mut cart = ShoppingCart::new();
/// cart.add_item(&apple, 4).unwrap();
/// cart.add_item(&bread, 1).unwrap();
/// assert_eq!(cart.total(), 4.0);
///
/// cart.remove_item(&bread);
/// cart.set_discount(Discount::percentage(0.10));
/// assert!((cart.total_with_discount() - 1.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
    discount: Discount,
}

impl ShoppingCart {
    /// Creates an empty cart with no discount.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Appends a new line for `product`.
    ///
    /// ## Errors
    /// Whatever [`CartItem::new`] rejects; the cart is left unchanged.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> ValidationResult<()> {
        let item = CartItem::new(product, quantity)?;
        debug!(product_id = %product.id(), name = %product.name(), quantity, "Adding cart item");
        self.items.push(item);
        Ok(())
    }

    /// Removes the first line whose product is `product` (matched by id).
    ///
    /// Returns whether a line was removed. A product that is not in the
    /// cart is not an error.
    pub fn remove_item(&mut self, product: &Product) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.product().is_same_product(product))
        {
            Some(index) => {
                self.items.remove(index);
                debug!(product_id = %product.id(), index, "Removed cart item");
                true
            }
            None => {
                debug!(product_id = %product.id(), "Product not in cart, nothing removed");
                false
            }
        }
    }

    /// Replaces the active discount.
    pub fn set_discount(&mut self, discount: Discount) {
        debug!(?discount, previous = ?self.discount, "Replacing cart discount");
        self.discount = discount;
    }

    #[inline]
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Returns a snapshot of the cart lines.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    /// Borrowing view over the lines, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Raw total: sum of line totals before discount.
    ///
    /// Uses compensated (Kahan) summation, so ten lines of 0.10 add up to
    /// exactly 1.0 rather than 0.9999999999999999.
    pub fn total(&self) -> f64 {
        compensated_sum(self.items.iter().map(CartItem::total_price))
    }

    /// Raw total after the active discount.
    pub fn total_with_discount(&self) -> f64 {
        self.discount.apply(self.total())
    }

    /// Number of lines (not units).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every line. The discount stays in place.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "Clearing cart");
        self.items.clear();
    }
}

/// Kahan summation with a plain running sum kept alongside.
///
/// When the compensated result turns NaN only because an infinity went
/// through the compensation term, the plain sum (that infinity) is returned.
fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    let mut simple = 0.0;

    for value in values {
        simple += value;
        let adjusted = value - compensation;
        let next = sum + adjusted;
        compensation = (next - sum) - adjusted;
        sum = next;
    }

    let result = sum - compensation;
    if result.is_nan() && simple.is_infinite() {
        simple
    } else {
        result
    }
}

/// Cart totals summary for the serving layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: f64,
    pub total_with_discount: f64,
    /// `total - total_with_discount`; negative when the discount raises the total.
    pub discount_amount: f64,
}

impl From<&ShoppingCart> for CartTotals {
    fn from(cart: &ShoppingCart) -> Self {
        let total = cart.total();
        let total_with_discount = cart.discount.apply(total);
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total,
            total_with_discount,
            discount_amount: total - total_with_discount,
        }
    }
}

/// Shared cart handle.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<ShoppingCart>>`:
/// - `Arc`: clones of the handle refer to the same cart
/// - `Mutex`: one caller touches the cart at a time
///
/// A poisoned lock is recovered; cart operations never leave the cart
/// half-updated, so the state behind it is still consistent.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<ShoppingCart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Wraps an existing cart.
    pub fn from_cart(cart: ShoppingCart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use grocery_core::{CartState, CartTotals};
    ///
    /// let state = CartState::new();
    /// let totals = state.with_cart(|cart| CartTotals::from(cart));
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShoppingCart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShoppingCart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const EPSILON: f64 = 1e-9;

    fn product(name: &str, price: f64) -> Product {
        Product::new(name, price).unwrap()
    }

    fn names(cart: &ShoppingCart) -> Vec<String> {
        cart.iter().map(|i| i.product().name().to_string()).collect()
    }

    #[test]
    fn test_empty_cart() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.total_with_discount(), 0.0);
        assert_eq!(cart.discount(), Discount::NoDiscount);
    }

    #[test]
    fn test_total_calculation() {
        let apple = product("Apple", 0.50);
        let bread = product("Bread", 2.00);

        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 4).unwrap();
        cart.add_item(&bread, 1).unwrap();

        assert!((cart.total() - (4.0 * 0.50 + 2.00)).abs() < EPSILON);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_checkout_scenario() {
        let apple = product("Apple", 0.50);
        let bread = product("Bread", 2.00);

        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 4).unwrap();
        cart.add_item(&bread, 1).unwrap();
        assert!((cart.total() - 4.0).abs() < EPSILON);

        assert!(cart.remove_item(&bread));
        assert!((cart.total() - 2.0).abs() < EPSILON);

        cart.set_discount(Discount::percentage(0.10));
        assert!((cart.total_with_discount() - 1.8).abs() < EPSILON);
    }

    #[test]
    fn test_total_uses_compensated_summation() {
        let gum = product("Gum", 0.10);
        let mut cart = ShoppingCart::new();
        for _ in 0..10 {
            cart.add_item(&gum, 1).unwrap();
        }

        assert_eq!(cart.total(), 1.0);
        assert_eq!(CartTotals::from(&cart).total, 1.0);
    }

    #[test]
    fn test_compensated_sum_edge_cases() {
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);
        assert_eq!(compensated_sum([f64::INFINITY, 1.0]), f64::INFINITY);
        assert!(compensated_sum([f64::NAN, 1.0]).is_nan());
    }

    #[test]
    fn test_total_quantity_saturates() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("Rice", 0.01), i64::MAX).unwrap();
        cart.add_item(&product("Beans", 0.01), i64::MAX).unwrap();

        assert_eq!(cart.total_quantity(), i64::MAX);
        assert_eq!(CartTotals::from(&cart).total_quantity, i64::MAX);
    }

    #[test]
    fn test_invalid_quantity_leaves_cart_unchanged() {
        let apple = product("Apple", 0.50);
        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 1).unwrap();

        assert!(cart.add_item(&apple, 0).is_err());
        assert!(cart.add_item(&apple, -3).is_err());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_duplicate_products_make_separate_lines() {
        let apple = product("Apple", 0.50);
        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 1).unwrap();
        cart.add_item(&apple, 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let apple = product("Apple", 0.50);
        let bread = product("Bread", 2.00);
        let milk = product("Milk", 1.50);

        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 1).unwrap();
        cart.add_item(&bread, 1).unwrap();
        cart.add_item(&apple, 3).unwrap();
        cart.add_item(&milk, 2).unwrap();

        assert!(cart.remove_item(&apple));

        let items = cart.items();
        assert_eq!(names(&cart), vec!["Bread", "Apple", "Milk"]);
        assert_eq!(items[1].quantity(), 3);
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let apple = product("Apple", 0.50);
        let pear = product("Pear", 0.75);

        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 2).unwrap();
        let before = cart.clone();

        assert!(!cart.remove_item(&pear));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_matches_identity_not_fields() {
        let apple = product("Apple", 0.50);
        let lookalike = product("Apple", 0.50);

        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 2).unwrap();

        assert!(!cart.remove_item(&lookalike));
        assert_eq!(cart.item_count(), 1);

        assert!(cart.remove_item(&apple.clone()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_returns_independent_copy() {
        let apple = product("Apple", 0.50);
        let mut cart = ShoppingCart::new();
        cart.add_item(&apple, 4).unwrap();

        let mut items = cart.items();
        items.clear();
        items.push(CartItem::new(&product("Caviar", 99.0), 10).unwrap());

        assert_eq!(cart.item_count(), 1);
        assert!((cart.total() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_item_count_tracks_adds_minus_successful_removes() {
        let catalog: Vec<Product> = (0..5).map(|i| product(&format!("P{i}"), i as f64)).collect();
        let absent = product("Absent", 1.0);
        let mut cart = ShoppingCart::new();
        let mut expected = 0usize;

        for (step, p) in catalog.iter().cycle().take(20).enumerate() {
            if step % 3 == 2 {
                if cart.remove_item(p) {
                    expected -= 1;
                }
                assert!(!cart.remove_item(&absent));
            } else {
                cart.add_item(p, 1).unwrap();
                expected += 1;
            }
            assert_eq!(cart.items().len(), expected);
        }
    }

    #[test]
    fn test_set_discount_replaces() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("Bread", 2.00), 5).unwrap();

        cart.set_discount(Discount::percentage(0.10));
        cart.set_discount(Discount::percentage(0.50));
        assert!((cart.total_with_discount() - 5.0).abs() < EPSILON);

        cart.set_discount(Discount::NoDiscount);
        assert!((cart.total_with_discount() - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_clear_keeps_discount() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("Bread", 2.00), 1).unwrap();
        cart.set_discount(Discount::percentage(0.2));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.discount(), Discount::percentage(0.2));
    }

    #[test]
    fn test_cart_totals() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("Apple", 0.50), 4).unwrap();
        cart.add_item(&product("Bread", 2.00), 1).unwrap();
        cart.set_discount(Discount::percentage(0.25));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 5);
        assert!((totals.total - 4.0).abs() < EPSILON);
        assert!((totals.total_with_discount - 3.0).abs() < EPSILON);
        assert!((totals.discount_amount - 1.0).abs() < EPSILON);

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["totalWithDiscount"], 3.0);
    }

    #[test]
    fn test_cart_state_shared_across_threads() {
        let state = CartState::new();
        let apple = product("Apple", 0.50);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                let apple = apple.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        state.with_cart_mut(|cart| cart.add_item(&apple, 1)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.with_cart(ShoppingCart::item_count), 80);
        assert!((state.with_cart(ShoppingCart::total) - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_cart_state_from_cart() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("Milk", 1.50), 2).unwrap();

        let state = CartState::from_cart(cart);
        assert_eq!(state.with_cart(ShoppingCart::total_quantity), 2);

        state.with_cart_mut(ShoppingCart::clear);
        assert!(state.with_cart(ShoppingCart::is_empty));
    }
}
