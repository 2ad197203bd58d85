//! Status ping routes
//!
//! - `POST /status` - Record a status check
//! - `GET /status` - Up to 1000 status checks, newest first

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::commands::{CreateStatusCheckCommand, CreateStatusCheckError};
use super::queries::{ListStatusChecksError, ListStatusChecksQuery};
use crate::db::Repository;
use crate::error::{AppError, AppResult};

pub fn status_routes() -> Router<Repository> {
    Router::new().route("/status", get(list_status_checks).post(create_status_check))
}

async fn create_status_check(
    State(repository): State<Repository>,
    payload: Result<Json<CreateStatusCheckCommand>, JsonRejection>,
) -> AppResult<Response> {
    let Json(command) = payload?;
    let check = super::commands::create::handle(repository, command).await?;
    Ok(Json(check).into_response())
}

async fn list_status_checks(State(repository): State<Repository>) -> AppResult<Response> {
    let checks = super::queries::list::handle(repository, ListStatusChecksQuery).await?;
    Ok(Json(checks).into_response())
}

impl From<CreateStatusCheckError> for AppError {
    fn from(err: CreateStatusCheckError) -> Self {
        match err {
            CreateStatusCheckError::Database(e) => AppError::Store(e),
        }
    }
}

impl From<ListStatusChecksError> for AppError {
    fn from(err: ListStatusChecksError) -> Self {
        match err {
            ListStatusChecksError::Database(e) => AppError::Store(e),
        }
    }
}
