//! Feature modules implementing the evaporation API
//!
//! Each feature is a vertical slice with its own commands, queries, and routes.
//!
//! # Features
//!
//! - **evaporation**: Penman evaporation estimates and their history
//! - **storage_planning**: Reservoir sizing from an evaporation estimate
//! - **status**: Client status pings
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (compute and persist)
//! - `queries/` - Read operations (history listings)
//! - `routes.rs` - HTTP route definitions and error mapping
//!
//! Commands and queries are plain data structures handled by standalone
//! `handle` functions that take the [`Repository`] they operate on.

pub mod evaporation;
pub mod status;
pub mod storage_planning;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::db::Repository;

pub const SERVICE_MESSAGE: &str = "Penman Evaporation Calculator API";

/// Shared state for all feature routes
#[derive(Clone, Debug)]
pub struct FeatureState {
    /// Handle to the document store holding all three collections
    pub repository: Repository,
}

impl FeatureState {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

/// Creates the API router with all feature routes mounted
///
/// - `/` - Service greeting
/// - `/calculate-evaporation`, `/evaporation-history`
/// - `/calculate-storage-planning`, `/storage-planning-history`
/// - `/status`
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .route("/", get(root))
        .merge(evaporation::evaporation_routes())
        .merge(storage_planning::storage_planning_routes())
        .merge(status::status_routes())
        .with_state(state.repository)
}

/// `GET /` - Service greeting
pub async fn root() -> Json<Value> {
    Json(json!({ "message": SERVICE_MESSAGE }))
}
