//! # Error Types
//!
//! Domain-specific error types for grocery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── Validation(ValidationError)  - bad constructor input              │
//! │  │     (Product name/price, CartItem quantity)                          │
//! │  └── Io(std::io::Error)           - receipt sink rejected a write      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller decides retry/abort        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Errors are enum variants, never String
//! 4. Every error is synchronous and terminal for the call that raised it

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the checkout pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The receipt sink rejected a write.
    ///
    /// ## When This Occurs
    /// - Closed pipe or socket behind the sink
    /// - Full disk behind a file sink
    ///
    /// Nothing is retried and the partially written receipt is not rolled back.
    #[error("Receipt output failed: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at construction time for products and cart items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
