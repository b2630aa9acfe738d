//! # tally-core: Pure Currency Presentation for Tally
//!
//! This crate turns amounts into display strings. It contains the only
//! non-trivial logic behind the dashboard's price cards and cart summary,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Consumers (web frontend via TS bindings, CLI)        │   │
//! │  │    Service Card ──► Cart Summary ──► Tax Table ──► Toasts       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain strings / JSON                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ currency  │  │  format   │  │   price   │  │    tax    │  │   │
//! │  │   │ Currency  │  │ grouping  │  │ DualPrice │  │ Breakdown │  │   │
//! │  │   │ ExchRate  │  │ rounding  │  │ Presenter │  │ TaxRate   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currencies, digit grouping, exchange rate
//! - [`format`] - Symbol placement, grouping, 0–2 digit rounding
//! - [`price`] - Dual-currency price and the presenter
//! - [`tax`] - State/central tax split
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks (finite, in range, positive rate)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Exact Decimals**: floats are converted once, at the boundary
//! 3. **Injected Rate**: the exchange rate is a value, never a global
//! 4. **Explicit Errors**: NaN and infinity are rejected, not printed
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{compute_tax_breakdown, CurrencyPresenter, ExchangeRate};
//!
//! let presenter = CurrencyPresenter::new(ExchangeRate::usd_to_inr(83.0).unwrap());
//!
//! let price = presenter.format_dual_currency(100.0).unwrap();
//! assert_eq!(price.combined, "$100 USD • ₹8,300 INR");
//!
//! let tax = compute_tax_breakdown(1000.0, 18.0).unwrap();
//! assert_eq!(tax.state.amount_display(), "90.00");
//! assert_eq!(tax.central.percent_label(), "9%");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod price;
pub mod tax;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::{Currency, DigitGrouping, ExchangeRate};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{format_currency, FractionDigits};
pub use price::{format_dual_currency, CurrencyPresenter, DualCurrencyPrice};
pub use tax::{compute_tax_breakdown, TaxBreakdown, TaxComponent, TaxKind, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default USD → INR multiplier when nothing is configured.
///
/// Deployments set their own rate at startup; this value only keeps
/// development builds rendering plausible numbers.
pub const DEFAULT_USD_INR_RATE: f64 = 83.0;

/// Default GST percentage applied by the cart summary.
pub const DEFAULT_TAX_PERCENT: f64 = 18.0;
