//! Gateway error types.
//!
//! Every failure leaving a handler is an [`ApiError`], rendered as
//! `{"error": <message>, "field": <field>}` with the matching status code.
//! `field` is omitted when the failure is not tied to one request field.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Message returned for every internal failure; details are only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP-facing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub field: Option<&'static str>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the offending request field.
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// 400 - malformed or rule-breaking input
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, details)
    }

    /// 401 - missing or rejected credentials
    pub fn unauthorized(details: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, details)
    }

    /// 404
    pub fn not_found(details: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, details)
    }

    /// 409 - uniqueness violation
    pub fn conflict(details: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, details)
    }

    /// 500 - logs `details` and hides them from the caller
    pub fn internal(details: impl fmt::Display) -> Self {
        error!(error = %details, "Internal error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: &self.message,
            field: self.field,
        });
        if self.status == StatusCode::UNAUTHORIZED {
            (self.status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (self.status, body).into_response()
        }
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (startup and serving, not per request)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(std::io::Error),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_with_field() {
        let response = ApiError::bad_request("too short")
            .with_field("inputs")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "too short", "field": "inputs"})
        );
    }

    #[tokio::test]
    async fn test_field_omitted_when_absent() {
        let response = ApiError::not_found("Calculation 3 not found").into_response();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Calculation 3 not found"})
        );
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let response = ApiError::internal("disk on fire").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": INTERNAL_ERROR_MESSAGE})
        );
    }

    #[test]
    fn test_unauthorized_challenges_bearer() {
        let response = ApiError::unauthorized("no token").into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
