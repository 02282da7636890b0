//! API Module
//!
//! HTTP handlers and routing for the banner server.
//!
//! # Endpoints
//! - `PUT /boards/:board/banners` - Replace a board's banners
//! - `GET /boards/:board/banners/:index` - Serve one banner's bytes
//! - `GET /boards/:board/banner` - Redirect to a random banner
//! - `GET /stats` - Store contents summary
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, create_router_with_limit};
