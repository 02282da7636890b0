//! Banner Store - An in-memory per-board banner cache
//!
//! Holds ordered banner lists by board behind a reader/writer lock and serves
//! them over HTTP, including uniform random selection.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banner_store::{
    api::create_router_with_limit,
    loader::seed_from_dir,
    AppState, Config,
};

/// Main entry point for the banner server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the banner store with the configured capacity
/// 4. Seed the store from `BANNER_DIR` if set
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banner_store=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting banner server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, initial_capacity={}, banner_dir={:?}, max_upload_bytes={}",
        config.server_port, config.initial_capacity, config.banner_dir, config.max_upload_bytes
    );

    let state = AppState::from_config(&config);
    info!("Banner store initialized");

    if let Some(dir) = &config.banner_dir {
        match seed_from_dir(&state.store, dir).await {
            Ok(summary) if summary.failed > 0 => warn!(
                "Seeded {} board(s) with {} banner(s) from {:?}, {} board(s) skipped",
                summary.boards, summary.banners, dir, summary.failed
            ),
            Ok(summary) => info!(
                "Seeded {} board(s) with {} banner(s) from {:?}",
                summary.boards, summary.banners, dir
            ),
            Err(e) => warn!("Could not list {:?}, no boards seeded: {}", dir, e),
        }
    }

    let app = create_router_with_limit(state, config.max_upload_bytes);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
