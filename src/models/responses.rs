//! Response DTOs for the banner server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::StoreStats;

/// Response body for a banner replacement (PUT /boards/:board/banners)
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceResponse {
    /// Success message
    pub message: String,
    /// The board that was updated
    pub board: String,
    /// Number of banners now stored for the board
    pub count: usize,
}

impl ReplaceResponse {
    /// Creates a new ReplaceResponse
    pub fn new(board: impl Into<String>, count: usize) -> Self {
        let board = board.into();
        Self {
            message: format!("Board '{}' now has {} banner(s)", board, count),
            board,
            count,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of boards with an entry
    pub boards: usize,
    /// Total number of banners
    pub banners: usize,
    /// Total payload size in bytes
    pub total_bytes: usize,
}

impl From<StoreStats> for StatsResponse {
    fn from(stats: StoreStats) -> Self {
        Self {
            boards: stats.boards,
            banners: stats.banners,
            total_bytes: stats.total_bytes,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
