//! Records exchanged with clients and persisted by the server
//!
//! Every record receives its identifier and creation timestamp once, in `new`.
//! Embedded records are owned copies, so a stored result never aliases the input it
//! was computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::penman::{Evaporation, PenmanComponents};
use crate::planning::{IrrigationRecommendation, SeasonalAnalysis, StoragePlan, WaterBalance};
use crate::timestamp;

/// Label stored when the client does not name a location.
pub const DEFAULT_LOCATION: &str = "Unknown Location";

fn default_location() -> Option<String> {
    Some(DEFAULT_LOCATION.to_string())
}

/// One day of weather observations at a single point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    /// Air temperature [°C]
    pub temperature: f64,
    /// Relative humidity [%]
    pub humidity: f64,
    /// Wind speed [m/s]
    pub wind_speed: f64,
    /// Solar radiation [MJ/m²/day]
    pub solar_radiation: f64,
    #[serde(default = "default_location")]
    pub location: Option<String>,
}

impl WeatherInput {
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, solar_radiation: f64) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            solar_radiation,
            location: default_location(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A computed evaporation estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporationResult {
    pub id: Uuid,
    /// mm/day, floored at zero
    pub evaporation_rate: f64,
    pub weather_input: WeatherInput,
    pub penman_components: PenmanComponents,
    #[serde(with = "timestamp::iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl EvaporationResult {
    pub fn new(weather_input: WeatherInput, evaporation: Evaporation) -> Self {
        Self {
            id: Uuid::new_v4(),
            evaporation_rate: evaporation.rate,
            weather_input,
            penman_components: evaporation.components,
            timestamp: timestamp::now(),
        }
    }
}

/// A storage plan together with the evaporation estimate it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePlanningResult {
    pub id: Uuid,
    /// m³
    pub reservoir_capacity_needed: f64,
    pub seasonal_analysis: SeasonalAnalysis,
    pub irrigation_recommendations: Vec<IrrigationRecommendation>,
    pub water_balance: WaterBalance,
    pub evaporation_data: EvaporationResult,
    #[serde(with = "timestamp::iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl StoragePlanningResult {
    pub fn new(plan: StoragePlan, evaporation_data: EvaporationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            reservoir_capacity_needed: plan.reservoir_capacity_needed,
            seasonal_analysis: plan.seasonal_analysis,
            irrigation_recommendations: plan.irrigation_recommendations,
            water_balance: plan.water_balance,
            evaporation_data,
            timestamp: timestamp::now(),
        }
    }
}

/// Liveness ping left by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    #[serde(with = "timestamp::iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: timestamp::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::{penman, planning};
    use serde_json::json;

    fn reference_result() -> EvaporationResult {
        let input = WeatherInput::new(25.0, 60.0, 2.0, 20.0).with_location("Pune");
        let evaporation = penman::compute_evaporation(25.0, 60.0, 2.0, 20.0).unwrap();
        EvaporationResult::new(input, evaporation)
    }

    #[test]
    fn test_location_defaults_when_missing() {
        let input: WeatherInput = serde_json::from_value(json!({
            "temperature": 25,
            "humidity": 60,
            "wind_speed": 2,
            "solar_radiation": 20
        }))
        .unwrap();
        assert_eq!(input.location.as_deref(), Some(DEFAULT_LOCATION));
        assert_eq!(input.temperature, 25.0);
    }

    #[test]
    fn test_explicit_null_location_is_kept() {
        let input: WeatherInput = serde_json::from_value(json!({
            "temperature": 25.0,
            "humidity": 60.0,
            "wind_speed": 2.0,
            "solar_radiation": 20.0,
            "location": null
        }))
        .unwrap();
        assert_eq!(input.location, None);
    }

    #[test]
    fn test_weather_input_rejects_wrong_types() {
        let result = serde_json::from_value::<WeatherInput>(json!({
            "temperature": "warm",
            "humidity": 60.0,
            "wind_speed": 2.0,
            "solar_radiation": 20.0
        }));
        assert!(result.is_err());

        let missing = serde_json::from_value::<WeatherInput>(json!({ "temperature": 25.0 }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_evaporation_result_wire_shape() {
        let result = reference_result();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["evaporation_rate"], json!(7.142));
        assert_eq!(value["weather_input"]["location"], json!("Pune"));
        assert_eq!(value["penman_components"]["wind_function"], json!(5.408));
        assert_eq!(value["id"], json!(result.id.to_string()));
        assert_eq!(value["timestamp"], json!(timestamp::format(&result.timestamp)));
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let evaporation = reference_result();
        let plan = planning::compute_storage_plan(evaporation.evaporation_rate, 1000.0).unwrap();
        let stored = StoragePlanningResult::new(plan, evaporation);

        let text = serde_json::to_string(&stored).unwrap();
        let restored: StoragePlanningResult = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, stored);
        assert_eq!(restored.evaporation_data.timestamp, stored.evaporation_data.timestamp);
    }

    #[test]
    fn test_embedded_input_is_a_copy() {
        let mut input = WeatherInput::new(25.0, 60.0, 2.0, 20.0);
        let evaporation = penman::compute_evaporation(25.0, 60.0, 2.0, 20.0).unwrap();
        let result = EvaporationResult::new(input.clone(), evaporation);

        input.temperature = 40.0;
        input.location = Some("Elsewhere".to_string());

        assert_eq!(result.weather_input.temperature, 25.0);
        assert_eq!(result.weather_input.location.as_deref(), Some(DEFAULT_LOCATION));
    }

    #[test]
    fn test_identifiers_are_unique() {
        let a = StatusCheck::new("field-station");
        let b = StatusCheck::new("field-station");
        assert_ne!(a.id, b.id);
        assert!(b.timestamp >= a.timestamp);
    }

    #[test]
    fn test_seasonal_analysis_wire_keys() {
        let plan = planning::compute_storage_plan(7.142, 1000.0).unwrap();
        let value = serde_json::to_value(plan.seasonal_analysis).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        for season in ["spring", "summer", "autumn", "winter"] {
            assert!(keys.iter().any(|k| k == season));
        }
        assert_eq!(value["summer"]["percentage_factor"], json!(1.3));
    }
}
