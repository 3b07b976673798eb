//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Bootstrap data the store refuses to start with │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  shopcart-bootstrap errors (separate crate)                            │
//! │  └── BootstrapError   - Config file / env / parse failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → BootstrapError → caller           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transitions on a running store never produce these errors. A refused
//! increase/decrease/remove is reported as a
//! [`Rejection`](crate::reducer::Rejection) and leaves state untouched.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building a cart from its bootstrap data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The initial item counts already exceed the cart-wide cap.
    ///
    /// ## When This Occurs
    /// ```text
    /// max_quantity = 20
    /// items: Apple x15, Bread x8   → total 23
    ///      │
    ///      ▼
    /// CapacityExceeded { total: 23, max: 20 }
    /// ```
    #[error("Initial quantity {total} exceeds maximum allowed ({max})")]
    CapacityExceeded { total: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of bootstrap data before a store exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
