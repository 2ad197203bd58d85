//! Evaporation history query

use evapo_common::types::EvaporationResult;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};

/// Most recent evaporation results, newest first, capped at 50
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EvaporationHistoryQuery;

#[derive(Debug, thiserror::Error)]
pub enum EvaporationHistoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repository))]
pub async fn handle(
    repository: Repository,
    _query: EvaporationHistoryQuery,
) -> Result<Vec<EvaporationResult>, EvaporationHistoryError> {
    let results = repository.history::<EvaporationResult>().await?;
    tracing::debug!(count = results.len(), "Evaporation history loaded");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::evaporation::commands::calculate::evaluate;
    use evapo_common::types::WeatherInput;

    #[tokio::test]
    async fn test_history_is_capped_and_newest_first() {
        let repository = Repository::in_memory();
        for i in 0..51 {
            let result = evaluate(WeatherInput::new(20.0 + i as f64 * 0.1, 50.0, 2.0, 18.0)).unwrap();
            repository.insert(&result).await.unwrap();
        }

        let history = handle(repository, EvaporationHistoryQuery).await.unwrap();

        assert_eq!(history.len(), 50);
        assert!(history.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        // The very first insert is the one that falls off.
        assert!(history.iter().all(|r| r.weather_input.temperature > 20.0));
    }

    #[tokio::test]
    async fn test_empty_history() {
        let history = handle(Repository::in_memory(), EvaporationHistoryQuery).await.unwrap();
        assert!(history.is_empty());
    }
}
