//! HTTP router construction.
//!
//! Assembles the SimpleJson routes and the CORS headers into a single `Router`.

use std::sync::Arc;

use axum::http::header::{
    ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/search", get(api::search).post(api::search))
        .route("/query", get(api::query).post(api::query))
        .layer(cors_layer())
        // CorsLayer only sends these on preflight; Grafana expects them everywhere.
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Accept, Content-Type"),
        ))
        .with_state(state)
}

/// Wide-open origin policy. Not a security boundary.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}
