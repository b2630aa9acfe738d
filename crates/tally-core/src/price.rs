//! # Price Module
//!
//! Dual-currency price display: one USD amount rendered in USD and INR.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Service card / cart line                                               │
//! │                                                                         │
//! │  amount_usd = 100                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CurrencyPresenter::format_dual_currency(100) ← THIS MODULE            │
//! │       │                                                                 │
//! │       ├── usd      "$100"                                               │
//! │       ├── inr      "₹8,300"          (100 × 83, Indian grouping)        │
//! │       └── combined "$100 USD • ₹8,300 INR"                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI renders the strings verbatim                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::currency::ExchangeRate;
use crate::error::CoreResult;
use crate::format::{format_currency, FractionDigits};
use crate::tax::{TaxBreakdown, TaxRate};
use crate::validation::validate_amount;

/// Glyph between the two halves of the combined string (U+2022 BULLET).
pub const SEPARATOR: &str = "•";

// =============================================================================
// Dual Currency Price
// =============================================================================

/// An amount formatted in the base and the quote currency.
///
/// ## Invariants
/// - `inr` encodes `round(amount × rate, 2)`
/// - `combined` contains `usd` and `inr` verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DualCurrencyPrice {
    pub usd: String,
    pub inr: String,
    pub combined: String,
}

impl DualCurrencyPrice {
    /// Formats an exact base-currency amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::currency::ExchangeRate;
    /// use tally_core::price::DualCurrencyPrice;
    ///
    /// let rate = ExchangeRate::usd_to_inr(83.0).unwrap();
    /// let price = DualCurrencyPrice::from_decimal(Decimal::from(100), &rate).unwrap();
    /// assert_eq!(price.combined, "$100 USD • ₹8,300 INR");
    /// ```
    pub fn from_decimal(amount: Decimal, rate: &ExchangeRate) -> CoreResult<Self> {
        let converted = rate.convert(amount)?;
        let base = rate.base();
        let quote = rate.quote();

        let usd = format_currency(amount, base, FractionDigits::CURRENCY);
        let inr = format_currency(converted, quote, FractionDigits::CURRENCY);
        let combined = format!(
            "{} {} {} {} {}",
            usd,
            base.code(),
            SEPARATOR,
            inr,
            quote.code()
        );

        Ok(DualCurrencyPrice { usd, inr, combined })
    }
}

impl fmt::Display for DualCurrencyPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.combined)
    }
}

/// Formats a USD amount as a dual-currency price.
///
/// Non-finite amounts are rejected with a validation error. Negative amounts
/// are formatted with a leading minus.
///
/// ## Example
/// ```rust
/// use tally_core::currency::ExchangeRate;
/// use tally_core::price::format_dual_currency;
///
/// let rate = ExchangeRate::usd_to_inr(83.0).unwrap();
///
/// let zero = format_dual_currency(0.0, &rate).unwrap();
/// assert_eq!(zero.usd, "$0");
/// assert_eq!(zero.inr, "₹0");
///
/// assert!(format_dual_currency(f64::NAN, &rate).is_err());
/// ```
pub fn format_dual_currency(amount_usd: f64, rate: &ExchangeRate) -> CoreResult<DualCurrencyPrice> {
    let amount = validate_amount("amount", amount_usd)?;
    DualCurrencyPrice::from_decimal(amount, rate)
}

// =============================================================================
// Currency Presenter
// =============================================================================

/// The presenter with its exchange rate injected.
///
/// Holds no mutable state; copy it into every thread that renders prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPresenter {
    rate: ExchangeRate,
}

impl CurrencyPresenter {
    /// Creates a presenter for the given rate.
    pub const fn new(rate: ExchangeRate) -> Self {
        CurrencyPresenter { rate }
    }

    /// The configured exchange rate.
    pub const fn rate(&self) -> &ExchangeRate {
        &self.rate
    }

    /// See [`format_dual_currency`].
    pub fn format_dual_currency(&self, amount_usd: f64) -> CoreResult<DualCurrencyPrice> {
        format_dual_currency(amount_usd, &self.rate)
    }

    /// See [`DualCurrencyPrice::from_decimal`].
    pub fn format_decimal(&self, amount_usd: Decimal) -> CoreResult<DualCurrencyPrice> {
        DualCurrencyPrice::from_decimal(amount_usd, &self.rate)
    }

    /// Tax breakdown does not depend on the exchange rate; exposed here so
    /// display code needs a single handle.
    pub fn compute_tax_breakdown(&self, subtotal: Decimal, rate: TaxRate) -> CoreResult<TaxBreakdown> {
        TaxBreakdown::compute(subtotal, rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use crate::error::{CoreError, ValidationError};
    use rust_decimal_macros::dec;

    fn presenter() -> CurrencyPresenter {
        CurrencyPresenter::new(ExchangeRate::usd_to_inr(83.0).unwrap())
    }

    #[test]
    fn test_hundred_dollars() {
        let price = presenter().format_dual_currency(100.0).unwrap();
        assert_eq!(price.usd, "$100");
        assert_eq!(price.inr, "₹8,300");
        assert_eq!(price.combined, "$100 USD • ₹8,300 INR");
    }

    #[test]
    fn test_zero() {
        let price = presenter().format_dual_currency(0.0).unwrap();
        assert_eq!(price.usd, "$0");
        assert_eq!(price.inr, "₹0");
        assert_eq!(price.combined, "$0 USD • ₹0 INR");
    }

    #[test]
    fn test_fractional_amounts() {
        let price = presenter().format_decimal(dec!(10.99)).unwrap();
        assert_eq!(price.usd, "$10.99");
        assert_eq!(price.inr, "₹912.17");

        let price = presenter().format_decimal(dec!(1204.5)).unwrap();
        assert_eq!(price.usd, "$1,204.5");
        assert_eq!(price.inr, "₹99,973.5");
    }

    #[test]
    fn test_inr_rounds_after_conversion() {
        // 0.015 × 83.5 = 1.2525 → ₹1.25, while $0.015 displays as $0.02
        let rate = ExchangeRate::new(Currency::Usd, Currency::Inr, dec!(83.5)).unwrap();
        let price = DualCurrencyPrice::from_decimal(dec!(0.015), &rate).unwrap();
        assert_eq!(price.usd, "$0.02");
        assert_eq!(price.inr, "₹1.25");
    }

    #[test]
    fn test_lakh_grouping() {
        let price = presenter().format_dual_currency(150_000.0).unwrap();
        assert_eq!(price.usd, "$150,000");
        assert_eq!(price.inr, "₹1,24,50,000");
    }

    #[test]
    fn test_negative_amount() {
        let price = presenter().format_dual_currency(-5.5).unwrap();
        assert_eq!(price.usd, "-$5.5");
        assert_eq!(price.inr, "-₹456.5");
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = presenter().format_dual_currency(f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_display_is_combined() {
        let price = presenter().format_dual_currency(1.0).unwrap();
        assert_eq!(price.to_string(), "$1 USD • ₹83 INR");
    }

    #[test]
    fn test_presenter_tax_breakdown() {
        let breakdown = presenter()
            .compute_tax_breakdown(dec!(1000), TaxRate::from_bps(1800))
            .unwrap();
        assert_eq!(breakdown.tax_amount_display(), "180.00");
    }

    #[test]
    fn test_serializes_to_json() {
        let price = presenter().format_dual_currency(100.0).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(
            json,
            r#"{"usd":"$100","inr":"₹8,300","combined":"$100 USD • ₹8,300 INR"}"#
        );
    }
}
