//! # Tax Command
//!
//! `tally tax <SUBTOTAL> [PERCENT]`: itemized state/central tax split.
//!
//! ```text
//! State Tax (9%)               90.00
//! Central Tax (9%)             90.00
//! Total Tax (18%)             180.00
//! ```

use tracing::debug;

use tally_core::validation::{parse_amount, validate_amount};
use tally_core::{TaxBreakdown, TaxRate};

use super::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliResult;

const LABEL_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 14;

/// Computes the breakdown; falls back to the configured percentage.
pub fn run(
    subtotal: &str,
    percent: Option<&str>,
    config: &CliConfig,
    format: OutputFormat,
) -> CliResult<String> {
    let subtotal = parse_amount("subtotal", subtotal)?;
    let rate = match percent {
        Some(text) => TaxRate::from_decimal(parse_amount("tax percent", text)?),
        None => TaxRate::from_decimal(validate_amount("tax percent", config.default_tax_percent)?),
    };
    debug!(%subtotal, %rate, "tax command");

    let breakdown = config.presenter()?.compute_tax_breakdown(subtotal, rate)?;

    Ok(match format {
        OutputFormat::Text => render_table(&breakdown),
        OutputFormat::Json => serde_json::to_string_pretty(&breakdown)?,
    })
}

/// Renders the breakdown as aligned lines. No grand total: the caller sums
/// subtotal and tax if it wants one.
pub fn render_table(breakdown: &TaxBreakdown) -> String {
    let mut lines: Vec<String> = breakdown
        .components()
        .iter()
        .map(|c| {
            line(
                &format!("{} ({})", c.kind.title(), c.percent_label()),
                &c.amount_display(),
            )
        })
        .collect();

    lines.push(line(
        &format!("Total Tax ({})", breakdown.rate.label()),
        &breakdown.tax_amount_display(),
    ));

    lines.join("\n")
}

fn line(label: &str, amount: &str) -> String {
    format!(
        "{:<lw$}{:>aw$}",
        label,
        amount,
        lw = LABEL_WIDTH,
        aw = AMOUNT_WIDTH
    )
}
