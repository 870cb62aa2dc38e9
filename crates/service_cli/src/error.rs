//! CLI error types.

use curve_core::market_data::CurveError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `funding` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Curve construction or query failed.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::InvalidCurve("empty base".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.to_string(), "Invalid curve definition: empty base");
    }

    #[test]
    fn test_curve_error_converts() {
        let err: CliError = CurveError::InsufficientData { got: 0, need: 1 }.into();
        assert!(matches!(err, CliError::Curve(_)));
        assert!(err.to_string().starts_with("Curve error: Insufficient data"));
    }
}
