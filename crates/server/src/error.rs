//! API error types.

use crate::relay::RelayError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("relay error: {0}")]
    Relay(#[from] RelayError),

    #[error("core error: {0}")]
    Core(#[from] vestibule_core::Error),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Multipart(_) => "invalid_multipart",
            Self::Relay(e) => match e {
                RelayError::Unreachable(_) => "downstream_unreachable",
                RelayError::Status { .. } => "downstream_status",
                RelayError::InvalidResponse(_) => "invalid_response",
                RelayError::Staging(_) => "staging_error",
            },
            Self::Core(_) => "staging_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Preserves axum's multipart status mapping (413 for body
            // limit, 400 for malformed bodies).
            Self::Multipart(e) => e.status(),
            Self::Relay(e) => match e {
                RelayError::Staging(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
