//! # App Error Type
//!
//! Everything that can stop the CLI. Out-of-stock and invalid selections are
//! not here: the session re-prompts for those.
//!
//! ```text
//! ConfigError ──┐
//! io::Error   ──┼──► AppError ──► main (anyhow) ──► stderr, exit code 1
//! CoreError   ──┤
//! serde_json  ──┘
//! ```

use pizzeria_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the terminal or writing the transcript failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Payment was refused by the order workflow.
    #[error("Order error: {0}")]
    Core(#[from] CoreError),

    #[error("Could not render inventory: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let config_err = ConfigError::InvalidValue("PIZZERIA_DEFAULT_PAYMENT".to_string());
        let err: AppError = config_err.into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for PIZZERIA_DEFAULT_PAYMENT"
        );
    }
}
