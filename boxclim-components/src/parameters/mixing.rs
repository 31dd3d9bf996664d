//! Vertical mixing parameters
//!
//! Parameters for the density-dependent mixing time between the upper and lower polar boxes.

use boxclim_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Coefficients of the linearised density difference.
///
/// $$ \Delta\rho = -\alpha (T_1 - T_2) + \beta (S_1 - S_2) $$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityDifferenceParameters {
    /// Thermal contraction coefficient
    /// unit: kg m^-3 °C^-1
    /// Default: 0.2
    pub alpha: FloatValue,

    /// Haline contraction coefficient
    /// unit: kg m^-3 psu^-1
    /// Default: 1.0
    pub beta: FloatValue,
}

impl Default for DensityDifferenceParameters {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta: 1.0,
        }
    }
}

/// Parameters of the stratification-dependent vertical mixing between the polar boxes.
///
/// The mixing time scale is a linear function of the density difference between the boxes.
/// A density contrast of `density_span_fraction` times the reference density stretches the
/// time scale by `tau_max - tau_min` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingParameters {
    /// Coefficients used for the upper/lower density difference
    pub density: DensityDifferenceParameters,

    /// Pressure at which the reference density of the lower box is evaluated
    /// unit: dbar
    /// Default: 101.0
    pub reference_pressure: FloatValue,

    /// Shortest mixing time scale
    /// unit: day
    /// Default: 10.0
    pub tau_min: FloatValue,

    /// Longest mixing time scale
    /// unit: day
    /// Default: 400.0
    pub tau_max: FloatValue,

    /// Density contrast, relative to the reference density, spanning `tau_min..tau_max`
    /// unit: dimensionless
    /// Default: 0.1
    pub density_span_fraction: FloatValue,

    /// Baseline density offset, relative to the reference density.
    /// Keeps mixing active when the boxes are unstratified.
    /// unit: dimensionless
    /// Default: 0.05
    pub baseline_fraction: FloatValue,
}

impl Default for MixingParameters {
    fn default() -> Self {
        Self {
            density: DensityDifferenceParameters::default(),
            reference_pressure: 101.0,
            tau_min: 10.0,
            tau_max: 400.0,
            density_span_fraction: 0.1,
            baseline_fraction: 0.05,
        }
    }
}
