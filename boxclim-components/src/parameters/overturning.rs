//! Overturning Parameters
//!
//! Parameters for the thermohaline overturning flux between the polar and equatorial boxes.

use boxclim_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters of the density-driven overturning circulation.
///
/// `alpha` and `beta` here are sensitivities of the transport to thermal and haline contrasts.
/// They are unrelated to the coefficients of [`super::DensityDifferenceParameters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverturningParameters {
    /// Overturning rate constant
    /// unit: 1 / day
    /// Default: 1.5e-6
    pub k: FloatValue,

    /// Thermal sensitivity
    /// unit: 1 / °C
    /// Default: 1.5e-4
    pub alpha: FloatValue,

    /// Haline sensitivity
    /// unit: 1 / psu
    /// Default: 8e-4
    pub beta: FloatValue,
}

impl Default for OverturningParameters {
    fn default() -> Self {
        Self {
            k: 1.5e-6,
            alpha: 1.5e-4,
            beta: 8.0e-4,
        }
    }
}
