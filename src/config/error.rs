//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a rule-set configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for a rule configuration
    #[error("Invalid rule configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The required pattern does not compile
    #[error("Invalid required pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The minimum length is below -1
    #[error("Invalid minimum length {0}, expected -1 (disabled) or a non-negative length")]
    InvalidMinLength(i64),
}
