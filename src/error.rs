//! Error Types
//!
//! This module defines the failure kinds surfaced by lookup operations and
//! how they map onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

// =============================================================================
// Not-Found Signal
// =============================================================================

/// Raised when a requested entity does not exist.
///
/// The message is fixed at construction and returned verbatim by both
/// [`DataNotFound::message`] and the `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DataNotFound {
    message: String,
}

impl DataNotFound {
    /// Creates the signal with a message describing what was not found.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message exactly as it was supplied.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Convenient result alias for handlers and lookups.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Internal,
}

/// Failures returned by the service's operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] DataNotFound),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status the failure is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code (`not_found`, `internal_error`)
    pub error: String,

    /// Human-readable description
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound(signal) => Self {
                error: "not_found".to_string(),
                message: signal.message().to_string(),
            },
            // Internal details stay in the logs.
            ApiError::Internal(_) => Self {
                error: "internal_error".to_string(),
                message: "Internal server error".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(signal) => tracing::debug!(detail = signal.message(), "not found"),
            ApiError::Internal(detail) => tracing::error!(error = %detail, "internal error"),
        }

        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}
