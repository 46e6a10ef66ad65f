//! Error types for the Quarry client

use thiserror::Error;

/// Errors that can occur when working with the Quarry client
#[derive(Error, Debug)]
pub enum QuarryError {
    /// Invalid configuration parameter
    #[error("Invalid configuration: {parameter} - {reason}")]
    InvalidConfiguration {
        /// Name of the invalid configuration parameter
        parameter: String,
        /// Detailed reason why the parameter is invalid
        reason: String,
    },

    /// The JSON engine failed while encoding a value on the write path
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The JSON engine failed while parsing or converting a response body
    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// I/O error on the caller-supplied byte stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An asynchronous call observed a cancellation request before starting work
    #[cfg(feature = "async")]
    #[error("Operation cancelled")]
    Cancelled,
}

impl QuarryError {
    /// Create an [`QuarryError::InvalidConfiguration`] for `parameter`.
    pub fn invalid_configuration(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        QuarryError::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Quarry client operations
pub type Result<T> = core::result::Result<T, QuarryError>;
