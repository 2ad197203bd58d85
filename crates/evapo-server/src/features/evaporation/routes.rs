//! Evaporation API routes
//!
//! - `POST /calculate-evaporation` - Calculate and store an evaporation estimate
//! - `GET /evaporation-history` - Up to 50 stored estimates, newest first

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::commands::{CalculateEvaporationCommand, CalculateEvaporationError};
use super::queries::{EvaporationHistoryError, EvaporationHistoryQuery};
use crate::db::Repository;
use crate::error::{AppError, AppResult};

pub fn evaporation_routes() -> Router<Repository> {
    Router::new()
        .route("/calculate-evaporation", post(calculate_evaporation))
        .route("/evaporation-history", get(evaporation_history))
}

/// `POST /calculate-evaporation`
///
/// - `200 OK` - The stored `EvaporationResult`
/// - `400 Bad Request` - Body is not a weather observation
/// - `422 Unprocessable Entity` - Inputs the model cannot evaluate
/// - `500 Internal Server Error` - Store failure
async fn calculate_evaporation(
    State(repository): State<Repository>,
    payload: Result<Json<CalculateEvaporationCommand>, JsonRejection>,
) -> AppResult<Response> {
    let Json(command) = payload?;
    let result = super::commands::calculate::handle(repository, command).await?;
    Ok(Json(result).into_response())
}

/// `GET /evaporation-history`
async fn evaporation_history(State(repository): State<Repository>) -> AppResult<Response> {
    let results = super::queries::history::handle(repository, EvaporationHistoryQuery).await?;
    Ok(Json(results).into_response())
}

impl From<CalculateEvaporationError> for AppError {
    fn from(err: CalculateEvaporationError) -> Self {
        match err {
            CalculateEvaporationError::Model(e) => AppError::Validation(e.to_string()),
            CalculateEvaporationError::Database(e) => AppError::Store(e),
        }
    }
}

impl From<EvaporationHistoryError> for AppError {
    fn from(err: EvaporationHistoryError) -> Self {
        match err {
            EvaporationHistoryError::Database(e) => AppError::Store(e),
        }
    }
}
