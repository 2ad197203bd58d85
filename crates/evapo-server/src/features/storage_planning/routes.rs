//! Storage planning API routes
//!
//! - `POST /calculate-storage-planning?surface_area=<m²>` - Calculate and store a plan
//! - `GET /storage-planning-history` - Up to 50 stored plans, newest first

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use evapo_common::types::WeatherInput;

use super::commands::{
    CalculateStoragePlanningCommand, CalculateStoragePlanningError, StoragePlanningParams,
};
use super::queries::{StoragePlanningHistoryError, StoragePlanningHistoryQuery};
use crate::db::Repository;
use crate::error::{AppError, AppResult};

pub fn storage_planning_routes() -> Router<Repository> {
    Router::new()
        .route("/calculate-storage-planning", post(calculate_storage_planning))
        .route("/storage-planning-history", get(storage_planning_history))
}

/// `POST /calculate-storage-planning`
///
/// The body is a weather observation; `surface_area` comes from the query string
/// and defaults to 1000 m².
///
/// - `200 OK` - The stored `StoragePlanningResult`
/// - `400 Bad Request` - Malformed body or query string
/// - `422 Unprocessable Entity` - Inputs the model cannot evaluate
/// - `500 Internal Server Error` - Store failure
async fn calculate_storage_planning(
    State(repository): State<Repository>,
    params: Result<Query<StoragePlanningParams>, QueryRejection>,
    payload: Result<Json<WeatherInput>, JsonRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let Json(weather) = payload?;

    let command = CalculateStoragePlanningCommand::new(weather, params);
    let result = super::commands::calculate::handle(repository, command).await?;
    Ok(Json(result).into_response())
}

/// `GET /storage-planning-history`
async fn storage_planning_history(State(repository): State<Repository>) -> AppResult<Response> {
    let results =
        super::queries::history::handle(repository, StoragePlanningHistoryQuery).await?;
    Ok(Json(results).into_response())
}

impl From<CalculateStoragePlanningError> for AppError {
    fn from(err: CalculateStoragePlanningError) -> Self {
        match err {
            CalculateStoragePlanningError::InvalidSurfaceArea(_) => {
                AppError::Validation(err.to_string())
            },
            CalculateStoragePlanningError::Model(e) => AppError::Validation(e.to_string()),
            CalculateStoragePlanningError::Database(e) => AppError::Store(e),
        }
    }
}

impl From<StoragePlanningHistoryError> for AppError {
    fn from(err: StoragePlanningHistoryError) -> Self {
        match err {
            StoragePlanningHistoryError::Database(e) => AppError::Store(e),
        }
    }
}
