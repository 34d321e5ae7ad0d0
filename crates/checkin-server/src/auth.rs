//! Admin authorization gate.
//!
//! Admin routes sit behind [`require_admin`], which compares the
//! `x-admin-token` header against the configured secret before the handler
//! (and therefore the store) is reached.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Whether `headers` carry a non-empty token equal to `expected`.
pub fn is_authorized(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .is_some_and(|token| !token.is_empty() && token.as_bytes() == expected.as_bytes())
}

pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_authorized(request.headers(), state.admin_token()) {
        tracing::warn!(path = %request.uri().path(), "rejected admin request");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}
