//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable '{name}'")]
    MissingVar { name: &'static str },

    /// The repository identifier is not in `owner/repo` form.
    #[error("Invalid repository '{value}': expected 'owner/repo'")]
    InvalidRepository { value: String },

    /// The pull request number is not a positive integer.
    #[error("Invalid pull request number '{value}': {source}")]
    InvalidPrNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
