//! HTTP surface of the server
//!
//! Feature routes live under `/api`; `/health` sits at the root so health checks do not
//! depend on the API prefix.

pub mod response;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::future::{Future, IntoFuture};
use std::time::Duration;
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::db::Repository;
use crate::features::{self, FeatureState};
use crate::middleware;

pub const API_PREFIX: &str = "/api";

/// Create the application router with all routes and middleware
pub fn create_router(repository: Repository, config: &Config) -> Router {
    let feature_routes = features::router(FeatureState::new(repository.clone()));

    Router::new()
        .route("/health", get(health_check))
        .with_state(repository)
        .nest(API_PREFIX, feature_routes)
        // Nested "/" only matches "/api"; keep the trailing-slash form reachable
        .route("/api/", get(features::root))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests
///
/// Draining stops accepting connections immediately and is bounded by
/// `drain_timeout`; connections still open after that are dropped.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (draining_tx, draining_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = draining_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        match draining_rx.await {
            Ok(()) => {
                tracing::info!(
                    "Waiting up to {} seconds for connections to close",
                    drain_timeout.as_secs()
                );
                tokio::time::sleep(drain_timeout).await;
            },
            // Server ended without a shutdown signal
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = &mut server => result,
        _ = deadline => {
            tracing::warn!(
                "Connections still open after {} seconds, shutting down anyway",
                drain_timeout.as_secs()
            );
            Ok(())
        },
    }
}

/// Health check handler
async fn health_check(State(repository): State<Repository>) -> Response {
    match repository.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "store": "unavailable"
                })),
            )
                .into_response()
        },
    }
}
