//! Penman open-water evaporation model
//!
//! ```text
//! E = Δ/(Δ+γ) · Rn + γ/(Δ+γ) · f(u) · (es − ea)
//! ```
//!
//! All intermediate quantities are computed in full `f64` precision; only the values
//! handed back to callers are rounded to [`PRECISION`] decimal places.

use serde::{Deserialize, Serialize};

use crate::error::{EvapoError, Result};
use crate::rounding::round_to;

/// Psychrometric constant γ [kPa/°C].
pub const PSYCHROMETRIC_CONSTANT: f64 = 0.665;

/// Latent heat of vaporization [MJ/kg], converts MJ/m²/day to mm/day.
pub const LATENT_HEAT_OF_VAPORIZATION: f64 = 2.45;

/// Decimal places kept on every reported quantity.
pub const PRECISION: usize = 3;

/// Intermediate quantities of a single evaporation estimate, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenmanComponents {
    pub radiation_component: f64,
    pub aerodynamic_component: f64,
    /// es [kPa]
    pub saturation_vapor_pressure: f64,
    /// ea [kPa]
    pub actual_vapor_pressure: f64,
    pub vapor_pressure_deficit: f64,
    /// Δ [kPa/°C]
    pub slope_vapor_pressure: f64,
    pub wind_function: f64,
    pub net_radiation_equivalent: f64,
}

/// Output of [`compute_evaporation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaporation {
    /// Evaporation rate [mm/day], floored at zero and rounded.
    pub rate: f64,
    pub components: PenmanComponents,
}

/// Saturation vapor pressure es [kPa] (Tetens).
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    0.6108 * ((17.27 * temperature) / (temperature + 237.3)).exp()
}

/// Slope Δ of the saturation vapor pressure curve [kPa/°C].
pub fn saturation_slope(temperature: f64, es: f64) -> f64 {
    (4098.0 * es) / (temperature + 237.3).powi(2)
}

/// Empirical wind function f(u), `u` in m/s.
pub fn wind_function(wind_speed: f64) -> f64 {
    2.6 * (1.0 + 0.54 * wind_speed)
}

/// Estimates the daily evaporation rate from one set of weather observations.
///
/// Inputs are not range checked. A negative total (e.g. supersaturated air and no
/// radiation) is floored at zero. The only failure is a quantity that is not finite,
/// which happens at `temperature == -237.3` or for inputs large enough to overflow.
pub fn compute_evaporation(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    solar_radiation: f64,
) -> Result<Evaporation> {
    let es = EvapoError::ensure_finite(
        "saturation_vapor_pressure",
        saturation_vapor_pressure(temperature),
    )?;
    let ea = EvapoError::ensure_finite("actual_vapor_pressure", es * (humidity / 100.0))?;
    let delta = EvapoError::ensure_finite("slope_vapor_pressure", saturation_slope(temperature, es))?;
    let rn = EvapoError::ensure_finite(
        "net_radiation_equivalent",
        solar_radiation / LATENT_HEAT_OF_VAPORIZATION,
    )?;
    let f_u = EvapoError::ensure_finite("wind_function", wind_function(wind_speed))?;

    let radiation = EvapoError::ensure_finite(
        "radiation_component",
        (delta / (delta + PSYCHROMETRIC_CONSTANT)) * rn,
    )?;
    let aerodynamic = EvapoError::ensure_finite(
        "aerodynamic_component",
        (PSYCHROMETRIC_CONSTANT / (delta + PSYCHROMETRIC_CONSTANT)) * f_u * (es - ea),
    )?;
    let evaporation = EvapoError::ensure_finite("evaporation_rate", radiation + aerodynamic)?;

    Ok(Evaporation {
        rate: round_to(evaporation.max(0.0), PRECISION),
        components: PenmanComponents {
            radiation_component: round_to(radiation, PRECISION),
            aerodynamic_component: round_to(aerodynamic, PRECISION),
            saturation_vapor_pressure: round_to(es, PRECISION),
            actual_vapor_pressure: round_to(ea, PRECISION),
            vapor_pressure_deficit: round_to(es - ea, PRECISION),
            slope_vapor_pressure: round_to(delta, PRECISION),
            wind_function: round_to(f_u, PRECISION),
            net_radiation_equivalent: round_to(rn, PRECISION),
        },
    })
}
