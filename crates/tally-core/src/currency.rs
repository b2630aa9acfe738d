//! # Currency Module
//!
//! Currencies the presenter knows how to display, and the exchange rate
//! between them.
//!
//! ## Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Currency   Code   Symbol   Grouping            Example                 │
//! │  ────────   ────   ──────   ─────────────────   ──────────────────────  │
//! │  Usd        USD    $        Western (3-3-3)     $12,345,678.5           │
//! │  Inr        INR    ₹        Indian  (3-2-2)     ₹1,23,45,678.5          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exchange Rate Lifecycle
//! The rate is read once at startup and handed to a
//! [`CurrencyPresenter`](crate::price::CurrencyPresenter). Nothing mutates it
//! afterwards, so it is freely shared across threads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_rate, validate_rate_decimal};

// =============================================================================
// Digit Grouping
// =============================================================================

/// How the integer part of an amount is split by thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// Groups of three everywhere: `12,345,678`.
    Western,
    /// Last three digits, then groups of two (lakh, crore): `1,23,45,678`.
    Indian,
}

// =============================================================================
// Currency
// =============================================================================

/// A display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar, the base currency for all input amounts.
    Usd,
    /// Indian rupee.
    Inr,
}

impl Currency {
    /// ISO 4217 code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    /// Symbol placed before the amount.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    /// Digit grouping used by the currency's home locale.
    #[inline]
    pub const fn grouping(&self) -> DigitGrouping {
        match self {
            Currency::Usd => DigitGrouping::Western,
            Currency::Inr => DigitGrouping::Indian,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Exchange rate between two currencies: `1 base = rate quote`.
///
/// ## Invariants
/// - `rate > 0`
/// - Immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate {
    base: Currency,
    quote: Currency,
    #[ts(as = "String")]
    rate: Decimal,
}

impl ExchangeRate {
    /// Creates an exchange rate from an exact decimal.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::currency::{Currency, ExchangeRate};
    ///
    /// let rate = ExchangeRate::new(Currency::Usd, Currency::Inr, Decimal::from(83)).unwrap();
    /// assert_eq!(rate.rate(), Decimal::from(83));
    ///
    /// assert!(ExchangeRate::new(Currency::Usd, Currency::Inr, Decimal::ZERO).is_err());
    /// ```
    pub fn new(base: Currency, quote: Currency, rate: Decimal) -> CoreResult<Self> {
        let rate = validate_rate_decimal(rate)?;
        Ok(ExchangeRate { base, quote, rate })
    }

    /// Creates a USD → INR rate from a floating point multiplier.
    pub fn usd_to_inr(rate: f64) -> CoreResult<Self> {
        let rate = validate_rate(rate)?;
        Ok(ExchangeRate {
            base: Currency::Usd,
            quote: Currency::Inr,
            rate,
        })
    }

    /// Source currency.
    #[inline]
    pub const fn base(&self) -> Currency {
        self.base
    }

    /// Target currency.
    #[inline]
    pub const fn quote(&self) -> Currency {
        self.quote
    }

    /// The multiplier.
    #[inline]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Converts an amount from `base` to `quote`.
    ///
    /// The result is exact and unrounded; rounding happens at display time so
    /// the displayed INR equals `round(amount × rate, 2)` and not a rounding of
    /// an already rounded value.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::currency::ExchangeRate;
    ///
    /// let rate = ExchangeRate::usd_to_inr(83.0).unwrap();
    /// let inr = rate.convert(Decimal::new(1099, 2)).unwrap(); // $10.99
    /// assert_eq!(inr, Decimal::new(91217, 2));               // ₹912.17
    /// ```
    pub fn convert(&self, amount: Decimal) -> CoreResult<Decimal> {
        amount.checked_mul(self.rate).ok_or(CoreError::Overflow {
            operation: "currency conversion",
        })
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.base, self.rate.normalize(), self.quote)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_conventions() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Usd.grouping(), DigitGrouping::Western);

        assert_eq!(Currency::Inr.code(), "INR");
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Inr.grouping(), DigitGrouping::Indian);
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
    }

    #[test]
    fn test_convert() {
        let rate = ExchangeRate::usd_to_inr(83.0).unwrap();
        assert_eq!(rate.convert(dec!(100)).unwrap(), dec!(8300));
        assert_eq!(rate.convert(dec!(0)).unwrap(), dec!(0));
        assert_eq!(rate.convert(dec!(-2.5)).unwrap(), dec!(-207.5));
    }

    #[test]
    fn test_convert_overflow() {
        let rate = ExchangeRate::usd_to_inr(83.0).unwrap();
        let err = rate.convert(Decimal::MAX).unwrap_err();
        assert!(matches!(err, CoreError::Overflow { .. }));
    }

    #[test]
    fn test_rejects_bad_rates() {
        assert!(ExchangeRate::usd_to_inr(0.0).is_err());
        assert!(ExchangeRate::usd_to_inr(f64::NAN).is_err());
        assert!(ExchangeRate::new(Currency::Usd, Currency::Inr, dec!(-1)).is_err());
    }

    #[test]
    fn test_display() {
        let rate = ExchangeRate::new(Currency::Usd, Currency::Inr, dec!(83.50)).unwrap();
        assert_eq!(rate.to_string(), "1 USD = 83.5 INR");
    }
}
