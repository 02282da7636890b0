//! API Routes
//!
//! Configures the Axum router with all banner server endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    banner_handler, health_handler, random_handler, replace_handler, stats_handler, AppState,
};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

/// Creates the main router with the default upload limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /boards/:board/banners` - Replace a board's banners
/// - `GET /boards/:board/banners/:index` - Serve one banner's bytes
/// - `GET /boards/:board/banner` - Redirect to a random banner
/// - `GET /stats` - Store contents summary
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: `max_upload_bytes` on the upload route
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router_with_limit(state: AppState, max_upload_bytes: usize) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/boards/:board/banners",
            put(replace_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/boards/:board/banners/:index", get(banner_handler))
        .route("/boards/:board/banner", get(random_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
