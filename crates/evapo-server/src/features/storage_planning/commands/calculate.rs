//! Calculate storage planning command
//!
//! Computes an evaporation estimate, sizes a reservoir from it, and stores the
//! combined record in `storage_planning_results`. The embedded evaporation result is
//! only stored inside the plan, not in `evaporation_results`.

use evapo_common::{
    planning,
    types::{StoragePlanningResult, WeatherInput},
    EvapoError,
};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};
use crate::features::evaporation::commands::calculate::evaluate;

/// Query string of `POST /calculate-storage-planning`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoragePlanningParams {
    /// Reservoir surface area [m²]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
}

/// Command to calculate and store a storage plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateStoragePlanningCommand {
    pub weather: WeatherInput,
    /// Reservoir surface area [m²]; zero and negative values are accepted
    pub surface_area: f64,
}

impl CalculateStoragePlanningCommand {
    pub fn new(weather: WeatherInput, params: StoragePlanningParams) -> Self {
        Self {
            weather,
            surface_area: params.surface_area.unwrap_or(planning::DEFAULT_SURFACE_AREA),
        }
    }

    pub fn validate(&self) -> Result<(), CalculateStoragePlanningError> {
        if !self.surface_area.is_finite() {
            return Err(CalculateStoragePlanningError::InvalidSurfaceArea(self.surface_area));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CalculateStoragePlanningError {
    #[error("Surface area must be a finite number, got {0}")]
    InvalidSurfaceArea(f64),

    #[error("Weather input cannot be evaluated: {0}")]
    Model(#[from] EvapoError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Builds a storage planning record without persisting it
pub fn evaluate_plan(
    command: CalculateStoragePlanningCommand,
) -> Result<StoragePlanningResult, CalculateStoragePlanningError> {
    command.validate()?;

    let evaporation = evaluate(command.weather)?;
    let plan = planning::compute_storage_plan(evaporation.evaporation_rate, command.surface_area)?;
    Ok(StoragePlanningResult::new(plan, evaporation))
}

#[tracing::instrument(
    skip(repository, command),
    fields(location = ?command.weather.location, surface_area = command.surface_area)
)]
pub async fn handle(
    repository: Repository,
    command: CalculateStoragePlanningCommand,
) -> Result<StoragePlanningResult, CalculateStoragePlanningError> {
    let result = evaluate_plan(command)?;

    repository.insert(&result).await?;

    tracing::info!(
        id = %result.id,
        evaporation_rate = result.evaporation_data.evaporation_rate,
        reservoir_capacity_needed = result.reservoir_capacity_needed,
        "Storage plan calculated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Collection, MemoryDocumentStore};
    use std::sync::Arc;

    fn reference_weather() -> WeatherInput {
        WeatherInput::new(25.0, 60.0, 2.0, 20.0)
    }

    #[test]
    fn test_surface_area_defaults_to_1000() {
        let command = CalculateStoragePlanningCommand::new(reference_weather(), StoragePlanningParams::default());
        assert_eq!(command.surface_area, 1000.0);
    }

    #[test]
    fn test_default_matches_explicit_1000() {
        let implicit = evaluate_plan(CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams::default(),
        ))
        .unwrap();
        let explicit = evaluate_plan(CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams { surface_area: Some(1000.0) },
        ))
        .unwrap();

        assert_eq!(implicit.reservoir_capacity_needed, explicit.reservoir_capacity_needed);
        assert_eq!(implicit.seasonal_analysis, explicit.seasonal_analysis);
        assert_eq!(implicit.water_balance, explicit.water_balance);
        assert_eq!(implicit.reservoir_capacity_needed, 3085.34);
    }

    #[test]
    fn test_zero_surface_area() {
        let result = evaluate_plan(CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams { surface_area: Some(0.0) },
        ))
        .unwrap();

        assert_eq!(result.reservoir_capacity_needed, 0.0);
        assert_eq!(result.water_balance.annual_evaporation_loss, 0.0);
        assert_eq!(result.evaporation_data.evaporation_rate, 7.142);
    }

    #[test]
    fn test_non_finite_surface_area_is_rejected() {
        let command = CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams { surface_area: Some(f64::INFINITY) },
        );
        assert!(matches!(
            evaluate_plan(command),
            Err(CalculateStoragePlanningError::InvalidSurfaceArea(_))
        ));
    }

    #[test]
    fn test_overflowing_plan_is_a_model_error() {
        let weather = WeatherInput::new(25.0, 60.0, 2.0, 1.0e308);
        let command = CalculateStoragePlanningCommand::new(weather, StoragePlanningParams::default());
        assert!(matches!(
            evaluate_plan(command),
            Err(CalculateStoragePlanningError::Model(EvapoError::NonFinite { .. }))
        ));
    }

    #[tokio::test]
    async fn test_overflowing_plan_is_not_persisted() {
        let store = Arc::new(MemoryDocumentStore::new());
        let repository = Repository::new(store.clone());
        let command = CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams { surface_area: Some(1.0e308) },
        );

        assert!(handle(repository.clone(), command).await.is_err());
        assert_eq!(store.count(Collection::StoragePlanningResults).await, 0);

        let stored: Vec<StoragePlanningResult> = repository.history().await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_handle_persists_only_the_plan() {
        let store = Arc::new(MemoryDocumentStore::new());
        let repository = Repository::new(store.clone());
        let command = CalculateStoragePlanningCommand::new(
            reference_weather(),
            StoragePlanningParams { surface_area: Some(2500.0) },
        );

        let result = handle(repository.clone(), command).await.unwrap();

        assert_eq!(result.water_balance.surface_area_assumed, 2500.0);
        assert_eq!(store.count(Collection::StoragePlanningResults).await, 1);
        assert_eq!(store.count(Collection::EvaporationResults).await, 0);

        let stored: Vec<StoragePlanningResult> = repository.history().await.unwrap();
        assert_eq!(stored, vec![result]);
    }
}
