//! # Commands
//!
//! One handler per subcommand. Handlers are pure: they take parsed input and
//! configuration and return the text to print, so `main` owns all I/O.
//!
//! ```text
//! tally price 100        ──► price::run ──► "$100 USD • ₹8,300 INR"
//! tally tax 1000 18      ──► tax::run   ──► itemized state/central table
//! ```

pub mod price;
pub mod tax;

use crate::cli::Command;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Dispatches a parsed command.
pub fn execute(command: &Command, config: &CliConfig, format: OutputFormat) -> CliResult<String> {
    match command {
        Command::Price { amount } => price::run(amount, config, format),
        Command::Tax { subtotal, percent } => tax::run(subtotal, percent.as_deref(), config, format),
    }
}
