//! Error types for the contact greeter.
//!
//! Configuration problems and remote API failures are kept apart so that each
//! caller can decide whether to propagate (configuration) or recover (API).

use thiserror::Error;

/// Errors that can occur when talking to the contacts backend or the gateway.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Resource not found (status 404)
    #[error("Resource not found (status 404): {0}")]
    NotFound(String),

    /// Credentials were rejected (status 401 or 403)
    #[error("Authentication failed (status {status}): {message}")]
    Unauthorized { status: u16, message: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
