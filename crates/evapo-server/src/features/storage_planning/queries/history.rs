//! Storage planning history query

use evapo_common::types::StoragePlanningResult;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};

/// Most recent storage plans, newest first, capped at 50
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoragePlanningHistoryQuery;

#[derive(Debug, thiserror::Error)]
pub enum StoragePlanningHistoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repository))]
pub async fn handle(
    repository: Repository,
    _query: StoragePlanningHistoryQuery,
) -> Result<Vec<StoragePlanningResult>, StoragePlanningHistoryError> {
    let results = repository.history::<StoragePlanningResult>().await?;
    tracing::debug!(count = results.len(), "Storage planning history loaded");
    Ok(results)
}
