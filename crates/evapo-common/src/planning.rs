//! Reservoir storage planning
//!
//! Turns a daily evaporation rate into volumetric losses over a fixed four-season
//! year and sizes a reservoir with a 50% buffer on top of the annual loss.

use serde::{Deserialize, Serialize};

use crate::error::{EvapoError, Result};
use crate::rounding::round_to;

/// Surface area [m²] assumed when the caller does not supply one.
pub const DEFAULT_SURFACE_AREA: f64 = 1000.0;

/// Every season is modelled as 90 days.
pub const SEASON_LENGTH_DAYS: f64 = 90.0;

/// Recommended capacity as a multiple of the annual loss.
pub const CAPACITY_MULTIPLIER: f64 = 1.5;

/// Buffer share of the annual loss; `1.0 + BUFFER_FRACTION == CAPACITY_MULTIPLIER`.
pub const BUFFER_FRACTION: f64 = 0.5;

/// Decimal places kept on volumes.
pub const PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Seasons in reporting (and summation) order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Multiplier applied to the daily loss for this season.
    pub fn factor(self) -> f64 {
        match self {
            Season::Spring => 0.8,
            Season::Summer => 1.3,
            Season::Autumn => 0.7,
            Season::Winter => 0.4,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Losses for one season [m³].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalLoss {
    pub daily_evaporation_loss: f64,
    pub seasonal_total_loss: f64,
    pub percentage_factor: f64,
}

impl SeasonalLoss {
    fn project(daily_loss: f64, season: Season) -> Result<Self> {
        let factor = season.factor();
        let daily = EvapoError::ensure_finite("daily_evaporation_loss", daily_loss * factor)?;
        let total = EvapoError::ensure_finite("seasonal_total_loss", daily * SEASON_LENGTH_DAYS)?;
        Ok(Self {
            daily_evaporation_loss: round_to(daily, PRECISION),
            seasonal_total_loss: round_to(total, PRECISION),
            percentage_factor: factor,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAnalysis {
    pub spring: SeasonalLoss,
    pub summer: SeasonalLoss,
    pub autumn: SeasonalLoss,
    pub winter: SeasonalLoss,
}

impl SeasonalAnalysis {
    pub fn get(&self, season: Season) -> &SeasonalLoss {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, &SeasonalLoss)> + '_ {
        Season::ALL.into_iter().map(move |season| (season, self.get(season)))
    }

    /// Sum of the reported (rounded) seasonal totals.
    pub fn annual_loss(&self) -> f64 {
        self.iter().map(|(_, loss)| loss.seasonal_total_loss).sum()
    }
}

/// Static irrigation guidance attached to every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationRecommendation {
    pub period: String,
    pub irrigation_frequency: String,
    pub water_requirement: String,
    pub evaporation_consideration: String,
}

const IRRIGATION_SCHEDULE: [(&str, &str, &str, &str); 3] = [
    (
        "Summer (Mar-Jun)",
        "Every 3-4 days",
        "High",
        "High evaporation losses — increase irrigation by 30%",
    ),
    (
        "Rainy (Jul-Oct)",
        "Every 10-15 days",
        "Low",
        "Rainfall compensates — minimal irrigation required",
    ),
    (
        "Winter (Nov-Feb)",
        "Every 7-10 days",
        "Medium",
        "Low evaporation — moderate irrigation needed",
    ),
];

pub fn irrigation_recommendations() -> Vec<IrrigationRecommendation> {
    IRRIGATION_SCHEDULE
        .iter()
        .map(|&(period, frequency, requirement, consideration)| IrrigationRecommendation {
            period: period.to_string(),
            irrigation_frequency: frequency.to_string(),
            water_requirement: requirement.to_string(),
            evaporation_consideration: consideration.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterBalance {
    pub annual_evaporation_loss: f64,
    pub recommended_buffer: f64,
    pub total_recommended_capacity: f64,
    pub surface_area_assumed: f64,
}

/// Output of [`compute_storage_plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoragePlan {
    /// Recommended reservoir capacity [m³].
    pub reservoir_capacity_needed: f64,
    pub seasonal_analysis: SeasonalAnalysis,
    pub irrigation_recommendations: Vec<IrrigationRecommendation>,
    pub water_balance: WaterBalance,
}

/// Projects seasonal losses and a recommended capacity.
///
/// `evaporation_rate` is in mm/day, `surface_area` in m². Neither is range checked: a
/// zero area yields an all-zero plan and a negative area yields negative losses.
/// Fails with [`EvapoError::NonFinite`] when a volume does not fit in an `f64`, so a
/// plan never carries values that cannot be stored as JSON numbers.
pub fn compute_storage_plan(evaporation_rate: f64, surface_area: f64) -> Result<StoragePlan> {
    let daily_loss = EvapoError::ensure_finite(
        "daily_evaporation_loss",
        (evaporation_rate / 1000.0) * surface_area,
    )?;

    let seasonal_analysis = SeasonalAnalysis {
        spring: SeasonalLoss::project(daily_loss, Season::Spring)?,
        summer: SeasonalLoss::project(daily_loss, Season::Summer)?,
        autumn: SeasonalLoss::project(daily_loss, Season::Autumn)?,
        winter: SeasonalLoss::project(daily_loss, Season::Winter)?,
    };

    let annual_loss =
        EvapoError::ensure_finite("annual_evaporation_loss", seasonal_analysis.annual_loss())?;
    let recommended_capacity = EvapoError::ensure_finite(
        "total_recommended_capacity",
        annual_loss * CAPACITY_MULTIPLIER,
    )?;

    Ok(StoragePlan {
        reservoir_capacity_needed: round_to(recommended_capacity, PRECISION),
        seasonal_analysis,
        irrigation_recommendations: irrigation_recommendations(),
        water_balance: WaterBalance {
            annual_evaporation_loss: round_to(annual_loss, PRECISION),
            recommended_buffer: round_to(annual_loss * BUFFER_FRACTION, PRECISION),
            total_recommended_capacity: round_to(recommended_capacity, PRECISION),
            surface_area_assumed: surface_area,
        },
    })
}
