//! API error types with IntoResponse
//!
//! Service error kinds are converted to JSON responses with a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pressroom_core::Error;
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Parameter failed type coercion (400)
    InvalidParameter { field: &'static str, reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Uniqueness violation (409)
    Conflict { message: String },

    /// Store failure (500, logged)
    Store(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidParameter { field, reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_parameter",
                    "message": format!("{}: {}", field, reason)
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": message
                }),
            ),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::NotFound { resource, id } => Self::NotFound { resource, id },
            Error::Conflict { .. } => Self::Conflict {
                message: e.to_string(),
            },
            Error::StoreUnavailable(_) => Self::Store(e),
        }
    }
}
