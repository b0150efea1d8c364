// src/error.rs

//! Unified error handling for the site.

use std::fmt;

use thiserror::Error;

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Backend answered with a non-success status
    #[error("Request to {endpoint} failed with status {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Backend answered with a body that is not valid JSON
    #[error("Invalid JSON response from {endpoint}")]
    InvalidJson { endpoint: String, body: String },

    /// Backend answered with something other than JSON
    #[error("Expected JSON from {endpoint}, got {found}")]
    ContentType { endpoint: String, found: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form or data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Enrollment or newsletter submission was rejected
    #[error("{0}")]
    Submission(String),
}

impl AppError {
    /// Create a status error for an endpoint.
    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error.
    pub fn not_found(what: impl fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }

    /// Create a submission error.
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    /// HTTP status code carried by the error, if it came from the backend.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message fit for showing to a site visitor.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Submission(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the backend reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || self.status_code() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = AppError::status("/courses", 500, "<html>oops</html>");
        assert_eq!(
            err.to_string(),
            "Request to /courses failed with status 500"
        );
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_user_message_is_bare() {
        assert_eq!(
            AppError::validation("Select at least one course.").user_message(),
            "Select at least one course."
        );
        assert_eq!(AppError::config("x").user_message(), "Configuration error: x");
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::status("/blogs/x", 404, "").is_not_found());
        assert!(AppError::not_found("blog x").is_not_found());
        assert!(!AppError::config("bad").is_not_found());
    }
}
