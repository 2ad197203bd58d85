//! List status checks query

use evapo_common::types::StatusCheck;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};

/// Most recent status checks, newest first, capped at 1000
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListStatusChecksQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListStatusChecksError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repository))]
pub async fn handle(
    repository: Repository,
    _query: ListStatusChecksQuery,
) -> Result<Vec<StatusCheck>, ListStatusChecksError> {
    Ok(repository.history::<StatusCheck>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repository = Repository::in_memory();
        for name in ["first", "second", "third"] {
            repository.insert(&StatusCheck::new(name)).await.unwrap();
        }

        let checks = handle(repository, ListStatusChecksQuery).await.unwrap();
        let names: Vec<_> = checks.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let checks = handle(Repository::in_memory(), ListStatusChecksQuery)
            .await
            .unwrap();
        assert!(checks.is_empty());
    }
}
