// Error types for CredWatch
//
// Structured error types using thiserror, so callers can match on the failure
// class (fatal auth/directory errors vs per-application fetch errors) instead
// of string-typed anyhow errors.

use std::io;
use thiserror::Error;

/// Main error type for CredWatch operations
#[derive(Debug, Error)]
pub enum CredError {
    /// Token endpoint refused the client-credentials grant or returned no token
    #[error("Authentication failed: {details}")]
    AuthenticationFailed { details: String },

    /// Directory or webhook endpoint returned a non-success HTTP status
    #[error("HTTP error (status {status}): {details}")]
    HttpStatus { status: u16, details: String },

    /// Credential expiry timestamp did not match any accepted form
    #[error("Unparseable expiry timestamp: {value:?}")]
    TimestampParse { value: String },

    /// Invalid or incomplete configuration
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// Invalid input from user or command line
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Reqwest HTTP client errors
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic I/O error
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CredError {
    fn from(err: anyhow::Error) -> Self {
        CredError::Other(err.to_string())
    }
}
