//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Conversion and tax computation failures        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-cli errors (app)                                                │
//! │  └── ConfigError      - Bad environment / flag values                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow::Error → stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core presentation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Decimal arithmetic left the representable range.
    ///
    /// ## When This Occurs
    /// - Converting an amount near `Decimal::MAX` with a rate above 1
    /// - Computing tax on an enormous subtotal
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any formatting or arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    ///
    /// ## User Workflow
    /// ```text
    /// Price field holds NaN (e.g. parse of an empty string upstream)
    ///      │
    ///      ▼
    /// validate_amount("amount", NaN)
    ///      │
    ///      ▼
    /// NotFinite { field: "amount" }
    ///      │
    ///      ▼
    /// UI shows: "amount must be a finite number"
    /// ```
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value cannot be represented as a decimal amount.
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: String, value: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. an unparseable number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
