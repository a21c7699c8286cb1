//! Error handling for the ADTO client
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Generic message shown when a registration fails without a server explanation
pub const GENERIC_REGISTRATION_FAILURE: &str = "An error occurred while submitting your registration. Please try again.";

/// Main error type for the ADTO client
#[derive(Error, Debug)]
pub enum AdtoError {
    #[error("Events API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Events API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for ADTO client operations
pub type Result<T> = std::result::Result<T, AdtoError>;

impl AdtoError {
    /// Check if the error is recoverable (retrying could succeed)
    pub fn is_recoverable(&self) -> bool {
        match self {
            AdtoError::Api(ApiError::RequestFailed { status, .. }) => *status >= 500,
            AdtoError::Api(ApiError::Timeout) => true,
            AdtoError::Api(ApiError::ServiceUnavailable) => true,
            AdtoError::Api(ApiError::InvalidResponse(_)) => false,
            AdtoError::Http(_) => true,
            AdtoError::Serialization(_) => false,
            AdtoError::Config(_) => false,
            AdtoError::Validation(_) => false,
            AdtoError::InvalidInput(_) => false,
            AdtoError::NotFound { .. } => false,
            AdtoError::AlreadySubmitting => true,
            AdtoError::Io(_) => true,
            AdtoError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdtoError::Config(_) => ErrorSeverity::Critical,
            AdtoError::UrlParse(_) => ErrorSeverity::Critical,
            AdtoError::Validation(_) => ErrorSeverity::Info,
            AdtoError::InvalidInput(_) => ErrorSeverity::Info,
            AdtoError::AlreadySubmitting => ErrorSeverity::Info,
            AdtoError::NotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Server-provided messages are passed through; everything else
    /// collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AdtoError::Api(ApiError::RequestFailed { message, .. }) if !message.is_empty() => {
                message.clone()
            }
            AdtoError::Validation(errors) => errors.join("\n"),
            AdtoError::InvalidInput(message) => message.clone(),
            AdtoError::NotFound { resource, id } => {
                format!("{} {:?} does not exist or is no longer available.", resource, id)
            }
            AdtoError::AlreadySubmitting => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AdtoError::Api(ApiError::RequestFailed { status, .. }) => Some(*status),
            AdtoError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
