//! Hero Gateway - A cache-aside aggregation service for an upstream hero API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hero_gateway::api::{create_router, AppState};
use hero_gateway::cache::{CacheBackend, CacheService, MemoryBackend, RedisBackend};
use hero_gateway::config::Config;
use hero_gateway::spawn_cleanup_task;
use hero_gateway::upstream::UpstreamHeroClient;

/// Main entry point for the hero gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache backend (Redis, or in-memory with a sweep task)
/// 4. Build the upstream client and wire the application state
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hero_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hero Gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: upstream={}, port={}, timeout={}ms, redis={}",
        config.hero_api_base_url,
        config.server_port,
        config.http_timeout_ms,
        config.redis_host.as_deref().unwrap_or("disabled")
    );

    let (backend, cleanup_handle) = connect_backend(&config).await;
    let cache = CacheService::new(backend);

    let client = UpstreamHeroClient::from_config(&config)
        .context("failed to build upstream HTTP client")?;
    let state = AppState::from_parts(cache, Arc::new(client));

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Picks Redis when configured and reachable, the in-memory store otherwise.
async fn connect_backend(config: &Config) -> (Arc<dyn CacheBackend>, Option<JoinHandle<()>>) {
    if let Some(url) = config.redis_url() {
        match RedisBackend::connect(&url).await {
            Ok(redis) => {
                let backend: Arc<dyn CacheBackend> = Arc::new(redis);
                return (backend, None);
            }
            Err(e) => warn!(error = %e, "Redis unavailable, falling back to in-memory cache"),
        }
    }

    let memory = MemoryBackend::new(config.cache_max_entries);
    let handle = spawn_cleanup_task(memory.clone(), config.cache_cleanup_interval);
    info!("In-memory cache initialized");
    let backend: Arc<dyn CacheBackend> = Arc::new(memory);
    (backend, Some(handle))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
