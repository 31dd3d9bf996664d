//! Relaxation parameters

use boxclim_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Relaxation of the boxes towards atmospheric and equatorial equilibrium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationParameters {
    /// Rate of temperature equilibration with the atmosphere (one year time scale)
    /// unit: 1 / day
    /// Default: 1 / 365
    pub temperature_rate: FloatValue,

    /// Rate of equatorial salinity equilibration (ten year time scale)
    /// unit: 1 / day
    /// Default: 1 / 3650
    pub salinity_rate: FloatValue,

    /// Equilibrium salinity of the equatorial box
    /// unit: psu
    /// Default: 35.2
    pub equatorial_salinity: FloatValue,
}

impl Default for RelaxationParameters {
    fn default() -> Self {
        Self {
            temperature_rate: 1.0 / 365.0,
            salinity_rate: 1.0 / (10.0 * 365.0),
            equatorial_salinity: 35.2,
        }
    }
}
