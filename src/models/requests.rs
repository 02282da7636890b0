//! Request DTOs for the banner server API
//!
//! Defines the structure of incoming HTTP request bodies.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::error::{BannerError, Result};
use crate::store::Asset;

/// A single banner in an upload, payload encoded as standard base64.
#[derive(Debug, Clone, Deserialize)]
pub struct BannerUpload {
    /// Base64-encoded file contents
    pub data: String,
    /// MIME type to serve the file with
    pub mime: String,
}

/// Request body for replacing a board's banners (PUT /boards/:board/banners)
///
/// The order of `banners` defines the banner indices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceBannersRequest {
    /// New banner list, possibly empty
    #[serde(default)]
    pub banners: Vec<BannerUpload>,
}

impl ReplaceBannersRequest {
    /// Decodes every upload into a store asset, preserving order.
    ///
    /// Fails on the first payload that is not valid base64.
    pub fn into_assets(self) -> Result<Vec<Asset>> {
        self.banners
            .into_iter()
            .enumerate()
            .map(|(i, upload)| {
                let data = STANDARD.decode(upload.data.as_bytes()).map_err(|e| {
                    BannerError::InvalidRequest(format!("banner {} has invalid base64: {}", i, e))
                })?;
                Ok(Asset::new(data, upload.mime))
            })
            .collect()
    }
}
