//! # Validation Module
//!
//! Turns raw caller input into exact decimals before any arithmetic runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend / CLI argument parsing                              │
//! │  ├── Empty fields, non-numeric text                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── NaN / ±∞ rejected (NotFinite)                                     │
//! │  ├── Magnitudes beyond Decimal range rejected (OutOfRange)             │
//! │  └── Exchange rate must be > 0                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checked arithmetic (CoreError::Overflow)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Negative amounts and negative tax percentages are accepted on purpose:
//! refunds and corrections display with a leading minus.
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_amount, validate_rate};
//!
//! let amount = validate_amount("amount", 10.99).unwrap();
//! assert_eq!(amount.to_string(), "10.99");
//!
//! assert!(validate_amount("amount", f64::NAN).is_err());
//! assert!(validate_rate(0.0).is_err());
//! ```

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a floating point amount and converts it to a `Decimal`.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must fit in a `Decimal` (about ±7.9 × 10²⁸)
/// - Sign is not checked
///
/// The conversion keeps the shortest decimal that round-trips the `f64`,
/// so `0.1` becomes `0.1` and not `0.1000000000000000055511151231`.
pub fn validate_amount(field: &str, value: f64) -> ValidationResult<Decimal> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Decimal::from_f64(value).ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validates an exchange rate.
///
/// ## Rules
/// - Must be finite
/// - Must be strictly positive (a zero rate would print every price as ₹0)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_rate;
///
/// assert!(validate_rate(83.0).is_ok());
/// assert!(validate_rate(0.0).is_err());
/// assert!(validate_rate(-1.0).is_err());
/// assert!(validate_rate(f64::INFINITY).is_err());
/// ```
pub fn validate_rate(value: f64) -> ValidationResult<Decimal> {
    let rate = validate_amount("exchange rate", value)?;
    validate_rate_decimal(rate)
}

/// Validates an exchange rate that is already a `Decimal`.
pub fn validate_rate_decimal(rate: Decimal) -> ValidationResult<Decimal> {
    if rate <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "exchange rate".to_string(),
        });
    }

    Ok(rate)
}

// =============================================================================
// String Parsers
// =============================================================================

/// Parses a decimal amount from text without going through `f64`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Plain decimal notation only (`1234.5`, `-3`, `0.005`)
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("subtotal", " 1000.50 ").unwrap().to_string(), "1000.50");
/// assert!(parse_amount("subtotal", "").is_err());
/// assert!(parse_amount("subtotal", "ten").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Decimal> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "value is empty".to_string(),
        });
    }

    Decimal::from_str(text).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("amount", 100.0).unwrap(), dec!(100));
        assert_eq!(validate_amount("amount", 0.1).unwrap(), dec!(0.1));
        assert_eq!(validate_amount("amount", -5.5).unwrap(), dec!(-5.5));
        assert_eq!(validate_amount("amount", 0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_amount_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                validate_amount("amount", value),
                Err(ValidationError::NotFinite {
                    field: "amount".to_string()
                })
            );
        }
    }

    #[test]
    fn test_validate_amount_rejects_huge_values() {
        let err = validate_amount("amount", 1e300).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_validate_rate() {
        assert_eq!(validate_rate(83.0).unwrap(), dec!(83));
        assert_eq!(validate_rate(83.25).unwrap(), dec!(83.25));

        assert!(validate_rate(0.0).is_err());
        assert!(validate_rate(-83.0).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate_decimal(dec!(0)).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", "1.005").unwrap(), dec!(1.005));
        assert_eq!(parse_amount("amount", "-42").unwrap(), dec!(-42));

        assert!(parse_amount("amount", "   ").is_err());
        assert!(parse_amount("amount", "12abc").is_err());
    }
}
