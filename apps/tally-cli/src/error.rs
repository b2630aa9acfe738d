//! # CLI Error Type
//!
//! Unified error type for command handlers.
//!
//! ## Error Flow
//! ```text
//! ValidationError ──┐
//! CoreError ────────┼──► CliError ──► anyhow::Error ──► stderr, exit 1
//! ConfigError ──────┤
//! serde_json ───────┘
//! ```

use tally_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors a command can return.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for command results.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: CliError = ConfigError::InvalidValue("TALLY_USD_INR_RATE".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for TALLY_USD_INR_RATE");

        let err: CliError = ValidationError::NotFinite {
            field: "amount".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "amount must be a finite number");
    }
}
