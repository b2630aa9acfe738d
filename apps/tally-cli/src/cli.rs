//! Command-line surface.

use clap::{Parser, Subcommand};

/// Format prices in USD and INR, and split tax into state and central halves.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Cli {
    /// USD → INR multiplier (overrides TALLY_USD_INR_RATE)
    #[arg(long, global = true)]
    pub rate: Option<f64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a USD amount in USD and INR
    Price {
        /// Amount in USD, e.g. 1204.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Split the tax on a subtotal into state and central tax
    Tax {
        /// Amount before tax
        #[arg(allow_hyphen_values = true)]
        subtotal: String,

        /// Tax percentage, e.g. 18 (defaults to TALLY_TAX_PERCENT or 18)
        #[arg(allow_hyphen_values = true)]
        percent: Option<String>,
    },
}
