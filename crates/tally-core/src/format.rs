//! # Format Module
//!
//! Locale-style number formatting without a locale database.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Decimal 12345678.005                                                   │
//! │      │                                                                  │
//! │      ▼  round to `max` places, half away from zero                      │
//! │  12345678.01                                                            │
//! │      │                                                                  │
//! │      ▼  trim trailing zeros down to `min` places                        │
//! │  12345678.01                                                            │
//! │      │                                                                  │
//! │      ▼  group integer digits (Western or Indian)                        │
//! │  1,23,45,678.01                                                         │
//! │      │                                                                  │
//! │      ▼  sign + symbol prefix                                            │
//! │  ₹1,23,45,678.01                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Half away from zero (`1.005 → 1.01`, `-1.005 → -1.01`). This matches the
//! "half expand" default of browser currency formatters, so server-rendered
//! and client-rendered prices agree to the cent. Because the input is an
//! exact `Decimal`, `1.005` really is `1.005` and not `1.00499999…`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{Currency, DigitGrouping};

const GROUP_SEPARATOR: &str = ",";
const DECIMAL_SEPARATOR: char = '.';

// =============================================================================
// Fraction Digits
// =============================================================================

/// Fractional digit policy: round to `max`, then drop trailing zeros until
/// `min` digits remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FractionDigits {
    pub min: u32,
    pub max: u32,
}

impl FractionDigits {
    /// Price display: `$100`, `$10.5`, `$10.25`.
    pub const CURRENCY: FractionDigits = FractionDigits { min: 0, max: 2 };

    /// Fixed two places: `90.00`.
    pub const FIXED_2: FractionDigits = FractionDigits { min: 2, max: 2 };

    /// Builds a policy, swapping the bounds if they arrive reversed.
    pub const fn new(min: u32, max: u32) -> Self {
        if min > max {
            FractionDigits { min: max, max: min }
        } else {
            FractionDigits { min, max }
        }
    }

    /// Exactly `places` fractional digits.
    pub const fn exact(places: u32) -> Self {
        FractionDigits {
            min: places,
            max: places,
        }
    }
}

impl Default for FractionDigits {
    fn default() -> Self {
        FractionDigits::CURRENCY
    }
}

// =============================================================================
// Public Formatters
// =============================================================================

/// Formats an amount in a currency: sign, symbol, grouped digits.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tally_core::currency::Currency;
/// use tally_core::format::{format_currency, FractionDigits};
///
/// let amount = Decimal::new(830000, 2); // 8300.00
/// assert_eq!(format_currency(amount, Currency::Inr, FractionDigits::CURRENCY), "₹8,300");
///
/// let refund = Decimal::new(-550, 2); // -5.50
/// assert_eq!(format_currency(refund, Currency::Usd, FractionDigits::CURRENCY), "-$5.5");
/// ```
pub fn format_currency(amount: Decimal, currency: Currency, digits: FractionDigits) -> String {
    let (negative, body) = format_parts(amount, currency.grouping(), digits);
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol(), body)
}

/// Formats a plain number: no symbol, no grouping.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tally_core::format::{format_plain, FractionDigits};
///
/// assert_eq!(format_plain(Decimal::new(1800, 1), FractionDigits::FIXED_2), "180.00");
/// assert_eq!(format_plain(Decimal::new(12345, 0), FractionDigits::FIXED_2), "12345.00");
/// ```
pub fn format_plain(amount: Decimal, digits: FractionDigits) -> String {
    let rounded = round_half_away(amount, digits.max);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let (int_part, frac_part) = split_digits(rounded.abs(), digits);
    let sign = if negative { "-" } else { "" };
    join(sign, &int_part, &frac_part)
}

/// Rounds to `places` decimal places, half away from zero.
#[inline]
pub fn round_half_away(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts group separators into a string of ASCII digits.
///
/// ## Example
/// ```rust
/// use tally_core::currency::DigitGrouping;
/// use tally_core::format::group_digits;
///
/// assert_eq!(group_digits("12345678", DigitGrouping::Western), "12,345,678");
/// assert_eq!(group_digits("12345678", DigitGrouping::Indian), "1,23,45,678");
/// assert_eq!(group_digits("999", DigitGrouping::Indian), "999");
/// ```
pub fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups = chunk_from_right(head, head_group);
    groups.push(tail);
    groups.join(GROUP_SEPARATOR)
}

// =============================================================================
// Helpers
// =============================================================================

/// Returns `(is_negative, grouped body without sign or symbol)`.
fn format_parts(amount: Decimal, grouping: DigitGrouping, digits: FractionDigits) -> (bool, String) {
    let rounded = round_half_away(amount, digits.max);
    // -0.004 rounds to zero; never print "-$0"
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let (int_part, frac_part) = split_digits(rounded.abs(), digits);
    let grouped = group_digits(&int_part, grouping);
    (negative, join("", &grouped, &frac_part))
}

/// Splits a non-negative, already rounded decimal into integer digits and
/// fractional digits trimmed to the policy.
fn split_digits(abs: Decimal, digits: FractionDigits) -> (String, String) {
    let mut scaled = abs;
    scaled.rescale(digits.max);
    let text = scaled.to_string();

    let (int_part, frac_part) = match text.split_once(DECIMAL_SEPARATOR) {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (text.clone(), String::new()),
    };

    let mut frac_part = frac_part;
    while frac_part.len() > digits.min as usize && frac_part.ends_with('0') {
        frac_part.pop();
    }

    (int_part, frac_part)
}

fn join(sign: &str, int_part: &str, frac_part: &str) -> String {
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}{}{}", sign, int_part, DECIMAL_SEPARATOR, frac_part)
    }
}

/// Chunks `s` into groups of `size` counted from the right.
fn chunk_from_right(s: &str, size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut end = s.len();
    while end > 0 {
        let start = end.saturating_sub(size);
        chunks.push(&s[start..end]);
        end = start;
    }
    chunks.reverse();
    chunks
}

// =============================================================================
// Unit Tests
// =============================================================================
