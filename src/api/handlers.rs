//! API Handlers
//!
//! HTTP request handlers for the administrative and serving endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::error::{BannerError, Result};
use crate::models::{HealthResponse, ReplaceBannersRequest, ReplaceResponse, StatsResponse};
use crate::store::BannerStore;

/// Application state shared across all handlers.
///
/// The store synchronizes internally, so handlers only need a shared reference.
#[derive(Clone)]
pub struct AppState {
    /// Shared banner store
    pub store: Arc<BannerStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: BannerStore) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Creates a new AppState around a store that is also held elsewhere.
    pub fn from_shared(store: Arc<BannerStore>) -> Self {
        Self { store }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(BannerStore::new(config.initial_capacity))
    }
}

/// Path of the canonical URL for one banner.
///
/// The board is escaped as a single path segment, so any board name routes
/// back to the same board.
pub fn banner_path(board: &str, index: usize) -> String {
    format!("/boards/{}/banners/{}", urlencoding::encode(board), index)
}

/// Handler for PUT /boards/:board/banners
///
/// Replaces the whole banner list of a board.
pub async fn replace_handler(
    State(state): State<AppState>,
    Path(board): Path<String>,
    Json(req): Json<ReplaceBannersRequest>,
) -> Result<Json<ReplaceResponse>> {
    let assets = req.into_assets()?;
    let count = assets.len();

    state.store.replace(board.as_str(), assets);
    info!("Replaced banners for board '{}': {} banner(s)", board, count);

    Ok(Json(ReplaceResponse::new(board, count)))
}

/// Handler for GET /boards/:board/banners/:index
///
/// Serves the raw banner bytes with the stored MIME type. An index that is not
/// a non-negative integer is treated like any other missing banner.
pub async fn banner_handler(
    State(state): State<AppState>,
    Path((board, index)): Path<(String, String)>,
) -> Result<Response> {
    let asset = index
        .parse::<usize>()
        .ok()
        .and_then(|i| state.store.get(&board, i))
        .ok_or_else(|| {
            debug!("Banner lookup miss: board='{}' index='{}'", board, index);
            BannerError::NotFound(format!("banner {} on board '{}'", index, board))
        })?;

    let content_type = HeaderValue::from_str(asset.mime()).map_err(|_| {
        BannerError::Internal(format!(
            "stored MIME type is not a valid header: {:?}",
            asset.mime()
        ))
    })?;

    Ok(([(header::CONTENT_TYPE, content_type)], asset.data().clone()).into_response())
}

/// Handler for GET /boards/:board/banner
///
/// Picks a random banner and redirects to its canonical URL.
pub async fn random_handler(
    State(state): State<AppState>,
    Path(board): Path<String>,
) -> Result<Response> {
    let pick = state.store.random(&board).ok_or_else(|| {
        debug!("Random banner miss: board='{}'", board);
        BannerError::NotFound(format!("no banners on board '{}'", board))
    })?;

    let location = banner_path(&board, pick.index);
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Handler for GET /stats
///
/// Returns a summary of the store contents.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.store.stats().into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
