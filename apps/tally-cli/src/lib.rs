//! # Tally CLI
//!
//! Command-line consumer of `tally-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Initialize logging                                                  │
//! │     • tracing-subscriber with env filter, writes to stderr              │
//! │     • Default: warn; override with RUST_LOG                             │
//! │  3. Load configuration                                                  │
//! │     • TALLY_USD_INR_RATE, TALLY_TAX_PERCENT, then --rate               │
//! │  4. Run the command, print its output to stdout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::OutputFormat;
use config::CliConfig;

/// Runs the CLI against the process arguments and environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = CliConfig::load()?.with_rate_override(cli.rate)?;
    info!(
        usd_inr_rate = config.usd_inr_rate,
        default_tax_percent = config.default_tax_percent,
        "Configuration loaded"
    );

    let output = commands::execute(&cli.command, &config, OutputFormat::from_flag(cli.json))?;
    println!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_cli_lib=trace` - Trace this crate only
/// - Default: WARN, so stderr stays quiet
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
