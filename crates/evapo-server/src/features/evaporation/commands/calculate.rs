//! Calculate evaporation command
//!
//! Runs the Penman model on one set of weather observations and appends the result
//! to the `evaporation_results` collection.

use evapo_common::{penman, types::EvaporationResult, types::WeatherInput, EvapoError};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};

/// Command to calculate and store an evaporation estimate
///
/// The request body is the weather observation itself:
///
/// ```json
/// {
///   "temperature": 25.0,
///   "humidity": 60.0,
///   "wind_speed": 2.0,
///   "solar_radiation": 20.0,
///   "location": "Pune"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculateEvaporationCommand {
    pub weather: WeatherInput,
}

impl From<WeatherInput> for CalculateEvaporationCommand {
    fn from(weather: WeatherInput) -> Self {
        Self { weather }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CalculateEvaporationError {
    #[error("Weather input cannot be evaluated: {0}")]
    Model(#[from] EvapoError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Builds an evaporation record without persisting it
pub fn evaluate(weather: WeatherInput) -> Result<EvaporationResult, EvapoError> {
    let evaporation = penman::compute_evaporation(
        weather.temperature,
        weather.humidity,
        weather.wind_speed,
        weather.solar_radiation,
    )?;
    Ok(EvaporationResult::new(weather, evaporation))
}

#[tracing::instrument(
    skip(repository, command),
    fields(location = ?command.weather.location)
)]
pub async fn handle(
    repository: Repository,
    command: CalculateEvaporationCommand,
) -> Result<EvaporationResult, CalculateEvaporationError> {
    let result = evaluate(command.weather)?;

    repository.insert(&result).await?;

    tracing::info!(
        id = %result.id,
        evaporation_rate = result.evaporation_rate,
        "Evaporation calculated"
    );

    Ok(result)
}
