//! Property-based tests for price formatting and tax splitting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::currency::{Currency, ExchangeRate};
use crate::format::round_half_away;
use crate::price::{DualCurrencyPrice, SEPARATOR};
use crate::tax::{TaxBreakdown, TaxRate};

/// Non-negative amounts with up to 4 decimal places (0 to 10,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Exchange rates from 0.0001 to 1,000.0000.
fn rate() -> impl Strategy<Value = ExchangeRate> {
    (1i64..10_000_000i64).prop_map(|v| {
        ExchangeRate::new(Currency::Usd, Currency::Inr, Decimal::new(v, 4)).unwrap()
    })
}

/// Tax percentages from 0.00 to 100.00.
fn tax_rate() -> impl Strategy<Value = TaxRate> {
    (0u32..=10_000).prop_map(TaxRate::from_bps)
}

/// Strips symbol and separators so the display can be compared numerically.
fn parse_display(display: &str) -> Decimal {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits.parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `combined` holds both halves verbatim around the separator.
    #[test]
    fn prop_combined_contains_both(amount in amount(), rate in rate()) {
        let price = DualCurrencyPrice::from_decimal(amount, &rate).unwrap();
        let expected = format!("{} USD {} {} INR", price.usd, SEPARATOR, price.inr);
        prop_assert_eq!(&price.combined, &expected);
        prop_assert!(price.combined.contains(&price.usd));
        prop_assert!(price.combined.contains(&price.inr));
    }

    /// The INR display encodes `round(amount × rate, 2)`.
    #[test]
    fn prop_inr_matches_conversion(amount in amount(), rate in rate()) {
        let price = DualCurrencyPrice::from_decimal(amount, &rate).unwrap();
        let expected = round_half_away(amount * rate.rate(), 2);
        prop_assert_eq!(parse_display(&price.inr), expected);
        prop_assert_eq!(parse_display(&price.usd), round_half_away(amount, 2));
    }

    /// Formatting is a pure function.
    #[test]
    fn prop_format_is_idempotent(amount in amount(), rate in rate()) {
        let first = DualCurrencyPrice::from_decimal(amount, &rate).unwrap();
        let second = DualCurrencyPrice::from_decimal(amount, &rate).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The two halves always sum to the total tax, to the cent.
    #[test]
    fn prop_split_sums_to_tax(subtotal in amount(), rate in tax_rate()) {
        let breakdown = TaxBreakdown::compute(subtotal, rate).unwrap();
        prop_assert_eq!(
            breakdown.state.amount + breakdown.central.amount,
            breakdown.tax_amount
        );
        let gap = breakdown.state.amount - breakdown.central.amount;
        prop_assert!(gap >= Decimal::ZERO && gap <= Decimal::new(1, 2));
    }

    /// More subtotal never means less tax.
    #[test]
    fn prop_tax_monotonic_in_subtotal(
        a in amount(),
        b in amount(),
        rate in tax_rate(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_tax = TaxBreakdown::compute(lo, rate).unwrap().tax_amount;
        let hi_tax = TaxBreakdown::compute(hi, rate).unwrap().tax_amount;
        prop_assert!(lo_tax <= hi_tax);
    }

    /// A higher rate never means less tax.
    #[test]
    fn prop_tax_monotonic_in_rate(
        subtotal in amount(),
        a in 0u32..=10_000,
        b in 0u32..=10_000,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_tax = TaxBreakdown::compute(subtotal, TaxRate::from_bps(lo)).unwrap().tax_amount;
        let hi_tax = TaxBreakdown::compute(subtotal, TaxRate::from_bps(hi)).unwrap().tax_amount;
        prop_assert!(lo_tax <= hi_tax);
    }
}
