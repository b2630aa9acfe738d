//! # Tax Module
//!
//! Splits a single tax amount into two equal, labelled halves for itemized
//! display (state tax + central tax).
//!
//! ## Breakdown Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal                               1000.00                         │
//! │  State Tax (9%)                           90.00   ◄── state             │
//! │  Central Tax (9%)                         90.00   ◄── central           │
//! │  ──────────────────────────────────────────────                         │
//! │  Total Tax (18%)                         180.00   ◄── tax_amount        │
//! │                                                                         │
//! │  Grand total (subtotal + tax) is the caller's job, not ours.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Odd Cents
//! ```text
//! tax_amount = 0.05
//!   central  = trunc(0.05 / 2, 2) = 0.02
//!   state    = 0.05 - 0.02        = 0.03   ◄── state carries the odd cent
//!   state + central == tax_amount  (always, exactly)
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::format::{format_plain, round_half_away, FractionDigits};
use crate::validation::validate_amount;

/// Display precision for every tax amount.
pub const TAX_DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a percentage (`18` means 18%).
///
/// Negative rates are allowed and produce negative tax (corrections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate {
    #[ts(as = "String")]
    percent: Decimal,
}

impl TaxRate {
    /// Creates a tax rate from an exact percentage.
    #[inline]
    pub const fn from_decimal(percent: Decimal) -> Self {
        TaxRate { percent }
    }

    /// Creates a tax rate from a floating point percentage.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::tax::TaxRate;
    ///
    /// let gst = TaxRate::from_percentage(18.0).unwrap();
    /// assert_eq!(gst.label(), "18%");
    /// assert!(TaxRate::from_percentage(f64::NAN).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> CoreResult<Self> {
        Ok(TaxRate {
            percent: validate_amount("tax percent", pct)?,
        })
    }

    /// Creates a tax rate from basis points (1800 = 18%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate {
            percent: Decimal::new(i64::from(bps), 2),
        }
    }

    /// The rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.percent
    }

    /// Half of this rate, the rate each split component is labelled with.
    pub fn halved(&self) -> TaxRate {
        TaxRate {
            percent: self.percent / Decimal::TWO,
        }
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate {
            percent: Decimal::ZERO,
        }
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.percent.is_zero()
    }

    /// Percentage label with trailing zeros trimmed: `9%`, `2.5%`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent.normalize())
    }

    /// Tax owed on `subtotal` at this rate, rounded to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::tax::TaxRate;
    ///
    /// let rate = TaxRate::from_bps(825); // 8.25%
    /// let tax = rate.tax_on(Decimal::new(1000, 2)).unwrap(); // $10.00
    /// // 0.825 → 0.83 (half away from zero)
    /// assert_eq!(tax, Decimal::new(83, 2));
    /// ```
    pub fn tax_on(&self, subtotal: Decimal) -> CoreResult<Decimal> {
        let overflow = || CoreError::Overflow {
            operation: "tax amount",
        };
        let raw = subtotal
            .checked_mul(self.percent)
            .ok_or_else(overflow)?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(overflow)?;
        Ok(round_half_away(raw, TAX_DECIMAL_PLACES))
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// Tax Components
// =============================================================================

/// Which half of the split a component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    /// State tax (SGST). Carries the odd cent.
    State,
    /// Central tax (CGST).
    Central,
}

impl TaxKind {
    /// Human-readable line label.
    pub const fn title(&self) -> &'static str {
        match self {
            TaxKind::State => "State Tax",
            TaxKind::Central => "Central Tax",
        }
    }
}

/// One labelled half of a tax breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxComponent {
    pub kind: TaxKind,
    pub rate: TaxRate,
    /// Amount at exactly two decimal places.
    #[ts(as = "String")]
    pub amount: Decimal,
}

impl TaxComponent {
    /// `9%`
    pub fn percent_label(&self) -> String {
        self.rate.label()
    }

    /// `90.00`
    pub fn amount_display(&self) -> String {
        format_plain(self.amount, FractionDigits::FIXED_2)
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// Tax owed on a subtotal, split into state and central halves.
///
/// ## Invariants
/// - `tax_amount == round(subtotal × rate / 100, 2)`
/// - `state.amount + central.amount == tax_amount`
/// - `state.rate == central.rate == rate / 2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    #[ts(as = "String")]
    pub subtotal: Decimal,
    pub rate: TaxRate,
    pub state: TaxComponent,
    pub central: TaxComponent,
    #[ts(as = "String")]
    pub tax_amount: Decimal,
}

impl TaxBreakdown {
    /// Computes the breakdown for exact inputs.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::tax::{TaxBreakdown, TaxRate};
    ///
    /// let breakdown = TaxBreakdown::compute(Decimal::from(1000), TaxRate::from_bps(1800)).unwrap();
    /// assert_eq!(breakdown.tax_amount_display(), "180.00");
    /// assert_eq!(breakdown.state.percent_label(), "9%");
    /// assert_eq!(breakdown.state.amount_display(), "90.00");
    /// assert_eq!(breakdown.central.amount_display(), "90.00");
    /// ```
    pub fn compute(subtotal: Decimal, rate: TaxRate) -> CoreResult<Self> {
        let mut tax_amount = rate.tax_on(subtotal)?;
        tax_amount.rescale(TAX_DECIMAL_PLACES);

        let (mut state_amount, mut central_amount) = split_in_half(tax_amount);
        state_amount.rescale(TAX_DECIMAL_PLACES);
        central_amount.rescale(TAX_DECIMAL_PLACES);

        let half_rate = rate.halved();

        Ok(TaxBreakdown {
            subtotal,
            rate,
            state: TaxComponent {
                kind: TaxKind::State,
                rate: half_rate,
                amount: state_amount,
            },
            central: TaxComponent {
                kind: TaxKind::Central,
                rate: half_rate,
                amount: central_amount,
            },
            tax_amount,
        })
    }

    /// Total tax at exactly two decimal places.
    pub fn tax_amount_display(&self) -> String {
        format_plain(self.tax_amount, FractionDigits::FIXED_2)
    }

    /// Both components, state first.
    pub fn components(&self) -> [&TaxComponent; 2] {
        [&self.state, &self.central]
    }
}

/// Computes the tax breakdown for floating point inputs.
///
/// Non-finite inputs are rejected; negative inputs pass through.
///
/// ## Example
/// ```rust
/// use tally_core::tax::compute_tax_breakdown;
///
/// let zero = compute_tax_breakdown(0.0, 18.0).unwrap();
/// assert_eq!(zero.tax_amount_display(), "0.00");
/// assert_eq!(zero.state.amount_display(), "0.00");
/// assert_eq!(zero.central.amount_display(), "0.00");
/// ```
pub fn compute_tax_breakdown(subtotal: f64, tax_percent: f64) -> CoreResult<TaxBreakdown> {
    let subtotal = validate_amount("subtotal", subtotal)?;
    let rate = TaxRate::from_percentage(tax_percent)?;
    TaxBreakdown::compute(subtotal, rate)
}

/// Splits a cent-rounded amount into `(larger, smaller)` halves whose sum is
/// exactly the input. "Larger" is by magnitude, so negatives mirror positives.
fn split_in_half(amount: Decimal) -> (Decimal, Decimal) {
    let half = (amount / Decimal::TWO)
        .round_dp_with_strategy(TAX_DECIMAL_PLACES, RoundingStrategy::ToZero);
    (amount - half, half)
}

// =============================================================================
// Unit Tests
// =============================================================================
