//! # Price Command
//!
//! `tally price <AMOUNT>`: dual-currency display of a USD amount.

use tracing::debug;

use tally_core::validation::parse_amount;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Formats `amount` with the configured exchange rate.
///
/// ## Output
/// - Text: `$100 USD • ₹8,300 INR`
/// - JSON: `{"usd":"$100","inr":"₹8,300","combined":"$100 USD • ₹8,300 INR"}`
pub fn run(amount: &str, config: &CliConfig, format: OutputFormat) -> CliResult<String> {
    let amount = parse_amount("amount", amount)?;
    let presenter = config.presenter()?;
    debug!(%amount, rate = %presenter.rate(), "price command");

    let price = presenter.format_decimal(amount)?;

    Ok(match format {
        OutputFormat::Text => price.combined,
        OutputFormat::Json => serde_json::to_string_pretty(&price)?,
    })
}
