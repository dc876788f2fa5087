use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use docdash_core::{QueryRequest, QueryResponse};

use crate::state::AppState;

use super::{error_response, ApiError};

/// Table or series data for the request's first target.
///
/// The body is decoded here rather than through the `Json` extractor so a
/// missing content type or a malformed body is reported like any other
/// client error.
pub async fn query(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<QueryResponse>, ApiError> {
    let request = QueryRequest::from_json(&body).map_err(error_response)?;
    if let Ok(target) = request.primary_target() {
        debug!(target = %target.target, kind = ?target.kind, "query");
    }

    let response = docdash_core::execute_query(state.store.as_ref(), &request)
        .await
        .map_err(error_response)?;
    Ok(Json(response))
}
