//! Error types for the CLI.

use impact_core::EstimatorError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Estimation or input decoding failed
    #[error("Estimation error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("input.json".to_string());
        assert_eq!(err.to_string(), "File not found: input.json");

        let err: CliError = EstimatorError::missing_field("reportedCases").into();
        assert!(err.to_string().contains("reportedCases"));

        let err: CliError = ConfigError::InvalidFormat("yaml".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
