//! Error handling for fulfil-log

use thiserror::Error;

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up logging
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive could not be parsed
    #[error("Invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A configuration value is not recognised
    #[error("Configuration error: {0}")]
    Config(String),

    /// A global subscriber is already installed
    #[error("Logger initialisation failed: {0}")]
    Init(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for mistakes in caller-supplied configuration
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Filter { .. } | Self::Config(_))
    }
}
