//! # Domain Types
//!
//! Catalog and cart line types used throughout the checkout pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                       │
//! │  │    Product      │◄─────────│    CartItem     │                       │
//! │  │  ─────────────  │          │  ─────────────  │                       │
//! │  │  id (UUID)      │          │  product        │                       │
//! │  │  name           │          │  quantity > 0   │                       │
//! │  │  price >= 0     │          │  total_price()  │                       │
//! │  └─────────────────┘          └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every product carries a [`ProductId`] assigned when it is constructed.
//! Clones keep the id and denote the same catalog entry; two products built
//! separately from the same name and price are distinct. Cart removal
//! matches on this id, never on name or price.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{validate_price, validate_product_name, validate_quantity};

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identity of a product (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh identity.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }

    /// Wraps an identity assigned elsewhere (catalog, persistence layer).
    pub const fn from_uuid(id: Uuid) -> Self {
        ProductId(id)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// An immutable catalog entry.
///
/// ## Example
/// ```rust
/// use grocery_core::Product;
///
/// let apple = Product::new("Apple", 0.50).unwrap();
/// assert_eq!(apple.name(), "Apple");
/// assert_eq!(apple.price(), 0.50);
///
/// assert!(Product::new("  ", 1.0).is_err());
/// assert!(Product::new("Apple", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Creates a product with a freshly generated id.
    ///
    /// ## Errors
    /// - `Required` when the name is empty or all whitespace
    /// - `Negative` when the price is below zero (or NaN)
    pub fn new(name: impl Into<String>, price: f64) -> ValidationResult<Self> {
        Self::with_id(ProductId::new(), name, price)
    }

    /// Creates a product under a known id, with the same checks as [`Product::new`].
    pub fn with_id(id: ProductId, name: impl Into<String>, price: f64) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product { id, name, price })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name, exactly as given at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Whether `other` denotes the same catalog entry.
    #[inline]
    pub fn is_same_product(&self, other: &Product) -> bool {
        self.id == other.id
    }
}

/// Wire shape of a product; deserialization re-runs the constructor checks.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::with_id(record.id, record.name, record.price)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product bound to a quantity.
///
/// The line total is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartItemRecord")]
pub struct CartItem {
    product: Product,
    quantity: i64,
}

impl CartItem {
    /// Creates a cart line.
    ///
    /// ## Errors
    /// - `MustBePositive` when `quantity <= 0`
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::{CartItem, Product};
    ///
    /// let apple = Product::new("Apple", 0.50).unwrap();
    /// let item = CartItem::new(&apple, 4).unwrap();
    /// assert_eq!(item.total_price(), 2.0);
    /// ```
    pub fn new(product: &Product, quantity: i64) -> ValidationResult<Self> {
        validate_quantity(quantity)?;

        Ok(CartItem {
            product: product.clone(),
            quantity,
        })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total (`price × quantity`), unrounded.
    #[inline]
    pub fn total_price(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

#[derive(Deserialize)]
struct CartItemRecord {
    product: Product,
    quantity: i64,
}

impl TryFrom<CartItemRecord> for CartItem {
    type Error = ValidationError;

    fn try_from(record: CartItemRecord) -> Result<Self, Self::Error> {
        CartItem::new(&record.product, record.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
