//! Error types for the dashboard domain

use axum::http::StatusCode;
use thiserror::Error;

/// Raised when text handed to the formatter is not valid JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid JSON")]
    InvalidJson { reason: String },
}

impl FormatError {
    pub fn invalid_json(err: serde_json::Error) -> Self {
        Self::InvalidJson {
            reason: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

/// Failures of the simulated backend.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Endpoint not found: '{0}'")]
    UnknownEndpoint(String),

    #[error("Test case not found: '{0}'")]
    UnknownTestCase(String),
}

impl SessionError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownEndpoint(_) | Self::UnknownTestCase(_) => StatusCode::NOT_FOUND,
        }
    }
}
