//! Lyrics Proxy - cached lyric lookups over HTTP
//!
//! Binary entry point: configuration, background sweeps, and the HTTP server.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyrics_proxy::api::create_router;
use lyrics_proxy::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the lyrics proxy.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the HTTP client, provider, fetcher and both caches
/// 4. Start background TTL cleanup tasks
/// 5. Serve the router until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyrics_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting lyrics proxy");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, query_ttl={}s, fetch_ttl={}s, cleanup_interval={}s, max_retries={}",
        config.server_port,
        config.query_cache_ttl,
        config.fetch_cache_ttl,
        config.cleanup_interval,
        config.fetch_max_retries
    );

    let state = AppState::from_config(&config).context("failed to build HTTP client")?;
    info!("Caches and upstream clients initialized");

    let cleanup_handles = vec![
        spawn_cleanup_task("query cache", state.lyrics_cache.clone(), config.cleanup_interval),
        spawn_cleanup_task("fetch cache", state.fetcher.cache(), config.cleanup_interval),
    ];

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handles))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the sweeps.
async fn shutdown_signal(cleanup_handles: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
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

    for handle in cleanup_handles {
        handle.abort();
    }
    warn!("Cleanup tasks aborted");
}
