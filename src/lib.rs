//! Banner Store - An in-memory per-board banner cache
//!
//! Holds ordered banner lists by board behind a reader/writer lock and serves
//! them over HTTP, including uniform random selection.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::{Asset, BannerStore, RandomPick};
