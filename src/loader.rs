//! Banner Seeding
//!
//! Rebuilds the store from a directory tree at startup. Every immediate
//! subdirectory of the root is a board; its regular files, sorted by name,
//! become that board's banners.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::store::{Asset, BannerStore};

/// MIME type used for files with an unrecognized extension
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Boards replaced
    pub boards: usize,
    /// Banners loaded across all boards
    pub banners: usize,
    /// Board directories skipped after an I/O error
    pub failed: usize,
}

/// Guesses a MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("webm") => "video/webm",
        Some("mp4") => "video/mp4",
        _ => FALLBACK_MIME,
    }
}

/// Replaces one board per subdirectory of `root`.
///
/// Boards already in the store but absent from `root` are left as they are.
/// A board that fails to load is logged and skipped, keeping its previous
/// list; only a failure to list `root` itself is returned as an error.
pub async fn seed_from_dir(store: &BannerStore, root: &Path) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for board_dir in sorted_entries(root).await? {
        let Some(board) = board_dir.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 board directory {:?}", board_dir);
            continue;
        };

        match load_board(&board_dir).await {
            Ok(Some(assets)) => {
                info!("Seeded board '{}' with {} banner(s)", board, assets.len());
                summary.boards += 1;
                summary.banners += assets.len();
                store.replace(board, assets);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping board '{}': {}", board, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Reads every regular file of a board directory, in name order.
///
/// Returns `None` if `dir` is not a directory.
async fn load_board(dir: &Path) -> Result<Option<Vec<Asset>>> {
    if !fs::metadata(dir).await?.is_dir() {
        return Ok(None);
    }

    let mut assets = Vec::new();
    for file in sorted_entries(dir).await? {
        if !fs::metadata(&file).await?.is_file() {
            continue;
        }
        let data = fs::read(&file).await?;
        assets.push(Asset::new(data, mime_for_path(&file)));
    }
    Ok(Some(assets))
}

/// Lists the entries of a directory sorted by file name.
async fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
