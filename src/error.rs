//! Client-side error taxonomy.
//!
//! Every failure surfaces as one of a small set of categories, each carrying
//! a user-facing message and structured details for logging. Nothing here is
//! retried automatically; the caller re-runs the operation with new input.

use serde_json::{Value, json};
use thiserror::Error;

/// Errors surfaced to the dashboard user.
///
/// - [`AppError::Unauthenticated`] - no stored token, or the backend rejected it
/// - [`AppError::FetchFailed`] - network failure or non-2xx response
/// - [`AppError::InvalidResponseShape`] - envelope `status` falsy, `data` absent,
///   or a body that does not decode
/// - [`AppError::Validation`] - client-side input rejection before any request
/// - [`AppError::Internal`] - local failures (e.g. token file I/O)
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthenticated { message: String, details: Value },
    #[error("{message}")]
    FetchFailed { message: String, details: Value },
    #[error("{message}")]
    InvalidResponseShape { message: String, details: Value },
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthenticated(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            details,
        }
    }
    pub fn fetch_failed(message: impl Into<String>, details: Value) -> Self {
        Self::FetchFailed {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_shape(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidResponseShape {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable category code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated { .. } => "unauthenticated",
            AppError::FetchFailed { .. } => "fetch_failed",
            AppError::InvalidResponseShape { .. } => "invalid_response_shape",
            AppError::Validation { .. } => "validation_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Structured details attached at construction time.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Unauthenticated { details, .. }
            | AppError::FetchFailed { details, .. }
            | AppError::InvalidResponseShape { details, .. }
            | AppError::Validation { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

/// Maps a transport-level [`reqwest::Error`] onto the taxonomy.
///
/// Decode failures mean the backend answered with something other than the
/// agreed envelope; everything else is a fetch failure.
pub fn map_reqwest_error(e: reqwest::Error) -> AppError {
    if e.is_decode() {
        return AppError::invalid_shape(
            "Response body did not match the expected shape",
            json!({ "reason": e.to_string() }),
        );
    }

    let reason = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else {
        "request"
    };

    AppError::fetch_failed(
        "Failed to reach the shortener API",
        json!({ "kind": reason, "reason": e.to_string() }),
    )
}
