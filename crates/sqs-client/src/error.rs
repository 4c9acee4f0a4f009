//! Error types for queue client operations.

use chrono::Duration;
use thiserror::Error;

/// Comprehensive error type for all queue client operations
#[derive(Debug, Error)]
pub enum SqsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport failed: {message}")]
    Transport { message: String },

    #[error("Service error ({code}): {message}")]
    Service { code: String, message: String },

    #[error("Protocol error: {message}")]
    Protocol { message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl SqsError {
    /// Check if error is transient and should be retried
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Transport { .. } => true,
            Self::Service { .. } => true, // Most service errors are transient
            Self::Protocol { .. } => false,
            Self::Configuration(_) => false,
        }
    }

    /// Check if error should be retried
    pub fn should_retry(&self) -> bool {
        self.is_transient()
    }

    /// Get suggested retry delay
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Transport { .. } => Some(Duration::seconds(5)),
            Self::Service { .. } => Some(Duration::seconds(1)),
            _ => None,
        }
    }

    /// Service-assigned error code, when the failure carries one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    Required { field: String },

    #[error("Invalid format for {field}: {message}")]
    InvalidFormat { field: String, message: String },

    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Configuration parsing failed: {message}")]
    Parsing { message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
