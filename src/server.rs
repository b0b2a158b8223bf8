//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, service wiring, and the Axum server lifecycle.

use crate::application::services::MappingService;
use crate::config::Config;
use crate::domain::repositories::MappingStore;
use crate::infrastructure::store::{InMemoryMappingStore, RedisMappingStore};
use crate::routes::app_router;
use crate::state::{AppState, DynMappingService};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the mapping store selected by the configuration.
///
/// Redis is used when a URL is configured; otherwise an in-memory store.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable after the
/// configured number of retries.
pub async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisMappingStore::connect_with_retry(
                redis_url,
                config.mapping_ttl(),
                config.redis_connect_retries,
            )
            .await
            .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, using in-memory store");
            Ok(Arc::new(InMemoryMappingStore::new(config.mapping_ttl())))
        }
    }
}

/// Builds the mapping service on top of the configured store.
pub async fn build_service(config: &Config) -> Result<Arc<DynMappingService>> {
    let store = build_store(config).await?;
    Ok(Arc::new(MappingService::with_policy(
        store,
        config.create_policy,
    )))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops gracefully on Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mapping_service = build_service(&config).await?;
    let state = AppState::new(mapping_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
