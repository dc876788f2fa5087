//! SimpleJson endpoint handlers.
//!
//! Shared error type lives here in mod.rs.

mod health;
mod query;
mod search;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use docdash_core::QueryError;

pub use health::index;
pub use query::query;
pub use search::search;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct QueryErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<QueryErrorResponse>);

/// Map a failed request to its HTTP status: caller mistakes are 400,
/// an unreachable store 503, unreadable stored data 500.
pub fn error_response(err: QueryError) -> ApiError {
    let status = match &err {
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        QueryError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(status = status.as_u16(), "request failed: {}", err);
    (
        status,
        Json(QueryErrorResponse {
            error: err.to_string(),
        }),
    )
}
