//! # Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command-line flags override it.
//!
//! ## Sources (Priority Order)
//! 1. Command-line flag (`--rate`)
//! 2. Environment variables (`TALLY_*`)
//! 3. Defaults (`tally_core::DEFAULT_*`)
//!
//! ## Thread Safety
//! Configuration is read-only after startup, so no locking is needed.

use serde::{Deserialize, Serialize};
use std::env;

use tally_core::validation::{validate_amount, validate_rate};
use tally_core::{CurrencyPresenter, ExchangeRate, DEFAULT_TAX_PERCENT, DEFAULT_USD_INR_RATE};

/// Environment variable holding the USD → INR multiplier.
pub const RATE_VAR: &str = "TALLY_USD_INR_RATE";

/// Environment variable holding the default tax percentage.
pub const TAX_PERCENT_VAR: &str = "TALLY_TAX_PERCENT";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// USD → INR multiplier
    pub usd_inr_rate: f64,

    /// Tax percentage used when `tally tax` is given no percent
    pub default_tax_percent: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            usd_inr_rate: DEFAULT_USD_INR_RATE,
            default_tax_percent: DEFAULT_TAX_PERCENT,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup (tests pass a map).
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let usd_inr_rate = match lookup(RATE_VAR) {
            Some(raw) => parse_rate(RATE_VAR, &raw)?,
            None => defaults.usd_inr_rate,
        };

        let default_tax_percent = match lookup(TAX_PERCENT_VAR) {
            Some(raw) => parse_percent(TAX_PERCENT_VAR, &raw)?,
            None => defaults.default_tax_percent,
        };

        Ok(CliConfig {
            usd_inr_rate,
            default_tax_percent,
        })
    }

    /// Applies the `--rate` flag on top of the loaded values.
    pub fn with_rate_override(mut self, rate: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(rate) = rate {
            validate_rate(rate).map_err(|_| ConfigError::InvalidValue("--rate".to_string()))?;
            self.usd_inr_rate = rate;
        }
        Ok(self)
    }

    /// The configured rate as a validated core value.
    pub fn exchange_rate(&self) -> Result<ExchangeRate, ConfigError> {
        ExchangeRate::usd_to_inr(self.usd_inr_rate)
            .map_err(|_| ConfigError::InvalidValue(RATE_VAR.to_string()))
    }

    /// A presenter wired with the configured rate.
    pub fn presenter(&self) -> Result<CurrencyPresenter, ConfigError> {
        Ok(CurrencyPresenter::new(self.exchange_rate()?))
    }
}

fn parse_rate(var: &str, raw: &str) -> Result<f64, ConfigError> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    validate_rate(rate).map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    Ok(rate)
}

fn parse_percent(var: &str, raw: &str) -> Result<f64, ConfigError> {
    let pct: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    validate_amount("tax percent", pct).map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    Ok(pct)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = CliConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.usd_inr_rate, 83.0);
        assert_eq!(config.default_tax_percent, 18.0);
    }

    #[test]
    fn test_env_values() {
        let config =
            CliConfig::load_from(lookup(&[(RATE_VAR, " 84.25 "), (TAX_PERCENT_VAR, "12")]))
                .unwrap();
        assert_eq!(config.usd_inr_rate, 84.25);
        assert_eq!(config.default_tax_percent, 12.0);
    }

    #[test]
    fn test_invalid_env_values() {
        assert_eq!(
            CliConfig::load_from(lookup(&[(RATE_VAR, "eighty")])),
            Err(ConfigError::InvalidValue(RATE_VAR.to_string()))
        );
        assert_eq!(
            CliConfig::load_from(lookup(&[(RATE_VAR, "0")])),
            Err(ConfigError::InvalidValue(RATE_VAR.to_string()))
        );
        assert_eq!(
            CliConfig::load_from(lookup(&[(TAX_PERCENT_VAR, "NaN")])),
            Err(ConfigError::InvalidValue(TAX_PERCENT_VAR.to_string()))
        );
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = CliConfig::load_from(lookup(&[(RATE_VAR, "80")]))
            .unwrap()
            .with_rate_override(Some(90.0))
            .unwrap();
        assert_eq!(config.usd_inr_rate, 90.0);
        assert_eq!(config.default_tax_percent, 18.0);

        let err = CliConfig::default().with_rate_override(Some(-1.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("--rate".to_string()));
    }

    #[test]
    fn test_presenter_uses_rate() {
        let presenter = CliConfig::default().presenter().unwrap();
        let price = presenter.format_dual_currency(2.0).unwrap();
        assert_eq!(price.inr, "₹166");
    }
}
