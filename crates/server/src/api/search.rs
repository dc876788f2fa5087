use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::state::AppState;

use super::{error_response, ApiError};

/// Dataset names across both domains. Any request body is ignored.
pub async fn search(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let names = docdash_core::list_datasets(state.store.as_ref())
        .await
        .map_err(error_response)?;
    debug!(count = names.len(), "search");
    Ok(Json(names))
}
