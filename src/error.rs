//! Error types for the banner server
//!
//! The store itself never fails; these errors belong to the HTTP and seeding layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Banner Error Enum ==
/// Unified error type for the banner server.
#[derive(Error, Debug)]
pub enum BannerError {
    /// Board or banner not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Stored data cannot be served
    #[error("Internal error: {0}")]
    Internal(String),

    /// Filesystem failure while seeding
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for BannerError {
    fn into_response(self) -> Response {
        let status = match &self {
            BannerError::NotFound(_) => StatusCode::NOT_FOUND,
            BannerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            BannerError::Internal(_) | BannerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the banner server.
pub type Result<T> = std::result::Result<T, BannerError>;
