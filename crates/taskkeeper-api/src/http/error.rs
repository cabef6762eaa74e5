//! Application error type mapping to HTTP status codes and envelope format.
//!
//! Note that dispatch failures never surface here: the skill converts them
//! to spoken apologies with status 200. This type only covers transport-level
//! problems, such as a body the extractor cannot parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Transport-level error that maps to an HTTP error response.
#[derive(Debug)]
pub enum AppError {
    /// The request body was not a valid skill envelope.
    Validation(String),
    /// Anything else.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
