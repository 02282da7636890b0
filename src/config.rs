//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::store::DEFAULT_INITIAL_CAPACITY;

/// Default request body limit for banner uploads
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Number of boards the store pre-allocates room for
    pub initial_capacity: usize,
    /// Directory to seed banners from at startup, one subdirectory per board
    pub banner_dir: Option<PathBuf>,
    /// Maximum accepted request body size for banner uploads
    pub max_upload_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `INITIAL_CAPACITY` - Pre-allocated board slots (default: 64)
    /// - `BANNER_DIR` - Seeding directory (default: unset, no seeding)
    /// - `MAX_UPLOAD_BYTES` - Upload body limit (default: 8 MiB)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(3000),
            initial_capacity: parse_var("INITIAL_CAPACITY").unwrap_or(DEFAULT_INITIAL_CAPACITY),
            banner_dir: env::var_os("BANNER_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            banner_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
