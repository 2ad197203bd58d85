//! Evaporation Server - Main entry point

use anyhow::Result;
use evapo_common::logging::{init_logging, LogConfig};
use std::{sync::Arc, time::Duration};
use tokio::signal;
use tracing::info;

use evapo_server::{
    api,
    config::{Config, StoreBackend},
    db::{DocumentStore, MemoryDocumentStore, PgDocumentStore, Repository},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("evapo-server")
        .filter_directives("evapo_server=debug,tower_http=debug,sqlx=info")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Evaporation Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let store: Arc<dyn DocumentStore> = match config.store.backend {
        StoreBackend::Postgres => {
            let store = PgDocumentStore::connect(&config.store).await?;
            info!("Database connection pool established");

            store.migrate().await?;
            info!("Database migrations completed");
            Arc::new(store)
        },
        StoreBackend::Memory => {
            info!("Using in-memory document store; records are lost on shutdown");
            Arc::new(MemoryDocumentStore::new())
        },
    };
    let repository = Repository::new(store);

    let app = api::create_router(repository.clone(), &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    api::serve(
        listener,
        app,
        shutdown_signal(),
        Duration::from_secs(config.server.shutdown_timeout_secs),
    )
    .await?;

    repository.close().await;
    info!("Server shut down gracefully");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

}
