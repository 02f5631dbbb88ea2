//! Typed API error for HTTP handlers.
//!
//! Handlers return `Result<_, ApiError>`; the error renders as a JSON body
//! `{"error": "message"}` with the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error with HTTP status code and human-readable message.
#[derive(Debug)]
pub enum ApiError {
    /// 401 Unauthorized: the webhook secret header is missing or wrong.
    Unauthorized(String),
    /// 503 Service Unavailable: no documentation snapshot installed yet.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}
