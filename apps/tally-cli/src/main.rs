//! # Tally CLI Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> anyhow::Result<()> {
    tally_cli_lib::run()
}
