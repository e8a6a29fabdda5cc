//! Route table for the HTTP server

use crate::http::handlers;
use crate::http::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page).post(handlers::submit_page))
        .route(
            "/api/search",
            post(handlers::search).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
