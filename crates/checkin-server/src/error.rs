//! API error types.
//!
//! Every failure leaves the handler as an [`ApiError`], which renders as
//! `{"ok": false, "error": "..."}` with the matching status code.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use checkin_core::error::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The submission payload broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body was not parseable JSON.
    #[error("Invalid JSON body.")]
    InvalidJson,

    /// The request body exceeded the configured limit.
    #[error("Request body too large.")]
    PayloadTooLarge,

    /// Missing or incorrect admin token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Anything unexpected. The cause is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
            StatusCode::BAD_REQUEST => ApiError::InvalidJson,
            _ => ApiError::Internal(anyhow::anyhow!("failed to read request body: {rejection}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!("request failed: {e:#}");
        }
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
