//! HTTP API handlers and router assembly.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{header, HeaderMap};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use checkin_core::export::to_csv;
use checkin_core::model::Submission;
use checkin_core::statistics::{compute_aggregates, AggregateStats};
use checkin_core::validate::validate_submission;

use crate::auth::require_admin;
use crate::error::ApiError;
use crate::pages;
use crate::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const CSV_DISPOSITION: &str = "attachment; filename=\"checkin.csv\"";

/// Build the full application router.
pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    let admin = Router::new()
        .route("/api/stats", get(stats))
        .route("/api/purge", post(purge))
        .route("/api/export", get(export))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/submit", post(submit))
        .merge(admin)
        .merge(pages::router())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}

/// `?purge=1` asks for the store to be emptied once the snapshot is taken.
#[derive(Debug, Default, Deserialize)]
pub struct PurgeQuery {
    #[serde(default)]
    purge: Option<String>,
}

impl PurgeQuery {
    /// Only the exact value `1` enables purging.
    pub fn requested(&self) -> bool {
        self.purge.as_deref() == Some("1")
    }

    /// A query string that does not deserialize (for example a repeated
    /// `purge` key) never enables purging.
    fn from_extracted(query: Result<Query<PurgeQuery>, QueryRejection>) -> Self {
        query.map(|Query(q)| q).unwrap_or_else(|rejection| {
            tracing::debug!("ignoring unreadable query string: {rejection}");
            Self::default()
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub ok: bool,
    pub aggregates: AggregateStats,
    pub submissions: Vec<Submission>,
}

async fn ping() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = body?;
    let payload = if is_json_content_type(&headers) {
        parse_body(&body)?
    } else {
        Value::Object(Map::new())
    };
    let input = validate_submission(&payload).inspect_err(|e| {
        tracing::debug!(field = e.field(), "rejected submission: {e}");
    })?;

    let submission = Submission::new(input);
    tracing::info!(id = %submission.id, "accepted submission");
    state.store().append(submission);

    Ok(Json(json!({ "ok": true })))
}

/// Whether the request declares an `application/json` body. Anything else
/// is read as an empty payload.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// An empty body reads as `{}`; anything else must be valid JSON.
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("unparseable submission body: {e}");
        ApiError::InvalidJson
    })
}

async fn stats(
    State(state): State<AppState>,
    query: Result<Query<PurgeQuery>, QueryRejection>,
) -> Json<StatsResponse> {
    let purge = PurgeQuery::from_extracted(query).requested();
    let submissions = take_snapshot(&state, purge, "stats");
    let aggregates = compute_aggregates(&submissions);

    Json(StatsResponse {
        ok: true,
        aggregates,
        submissions,
    })
}

async fn purge(State(state): State<AppState>) -> Json<Value> {
    let removed = state.store().purge();
    tracing::info!(count = removed, "purged submissions");
    Json(json!({ "ok": true, "purged": true }))
}

async fn export(
    State(state): State<AppState>,
    query: Result<Query<PurgeQuery>, QueryRejection>,
) -> impl IntoResponse {
    let purge = PurgeQuery::from_extracted(query).requested();
    let submissions = take_snapshot(&state, purge, "export");
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, CSV_DISPOSITION),
        ],
        to_csv(&submissions),
    )
}

/// Snapshot the store, purging it in the same critical section if asked.
/// The caller renders its response from the returned pre-purge records.
fn take_snapshot(state: &AppState, purge: bool, source: &str) -> Vec<Submission> {
    let submissions = state.store().snapshot_then_purge(purge);
    if purge && !submissions.is_empty() {
        tracing::info!(count = submissions.len(), "purged submissions after {source} snapshot");
    }
    submissions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_flag_requires_exact_one() {
        let q = |v: Option<&str>| PurgeQuery {
            purge: v.map(str::to_string),
        };
        assert!(q(Some("1")).requested());
        assert!(!q(None).requested());
        assert!(!q(Some("0")).requested());
        assert!(!q(Some("true")).requested());
        assert!(!q(Some(" 1")).requested());
    }

    #[test]
    fn only_json_content_types_are_parsed() {
        let with = |ct: &str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, ct.parse().unwrap());
            headers
        };
        assert!(is_json_content_type(&with("application/json")));
        assert!(is_json_content_type(&with("Application/JSON; charset=utf-8")));
        assert!(!is_json_content_type(&with("text/plain")));
        assert!(!is_json_content_type(&with("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn blank_body_reads_as_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b"  \n").unwrap(), json!({}));
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        assert!(matches!(parse_body(b"{name:"), Err(ApiError::InvalidJson)));
    }
}
