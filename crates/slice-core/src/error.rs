//! # Error Types
//!
//! Domain-specific error types for slice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  slice-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing failures                            │
//! │  └── ValidationError  - Menu sanity-check failures                  │
//! │                                                                     │
//! │  NOT errors (benign no-ops by design):                              │
//! │  ├── Unknown topping       → contributes zero to the pizza price    │
//! │  ├── Unknown promo code    → discount is zero                       │
//! │  └── Unrecognized promo    → discount is zero                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending size name, etc.)
//! 3. Errors are enum variants, never String
//! 4. The only fatal pricing condition is an unknown size; everything else
//!    the configuration can throw at us degrades to a zero contribution

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// An error here aborts the whole order computation it occurs in; there is
/// no partial result and no default-price substitution.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A pizza references a size absent from the menu's size table.
    ///
    /// ## When This Occurs
    /// - Typo in the caller's pizza spec ("lrage")
    /// - Menu document missing its `sizes` section entirely
    /// - Caller and menu built against different shop configurations
    #[error("Unknown size: {size}")]
    UnknownSize { size: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Menu sanity-check errors.
///
/// Raised only by the opt-in validators in [`crate::validation`]; the
/// pricing pipeline itself never pre-validates (a loader that wants to
/// reject nonsense early calls `validate_menu` before pricing).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A configured amount must not be negative.
    #[error("{field} must not be negative (got {value})")]
    MustBeNonNegative { field: String, value: String },

    /// A configured value is outside its allowed range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
