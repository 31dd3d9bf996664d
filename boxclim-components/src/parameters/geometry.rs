//! Geometry Parameters
//!
//! Parameters for the depth of the upper polar box as sea level rises, and for the freshwater
//! that the rise adds to it.

use boxclim_core::timeseries::{DayIndex, FloatValue};
use serde::{Deserialize, Serialize};

/// Geometry of the upper polar box.
///
/// The box deepens linearly in time as sea level rises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxGeometry {
    /// Depth of the box at day 0
    /// unit: m
    /// Default: 100.0
    pub depth: FloatValue,

    /// Rate of sea-level rise
    /// unit: m / day
    /// Default: 1e-4
    pub sea_level_rise_rate: FloatValue,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self {
            depth: 100.0,
            sea_level_rise_rate: 1.0e-4,
        }
    }
}

impl BoxGeometry {
    /// Depth of the box on `day`.
    ///
    /// $$ D(n) = D_0 + n \cdot r_{slr} $$
    pub fn depth_at(&self, day: DayIndex) -> FloatValue {
        self.depth + day as FloatValue * self.sea_level_rise_rate
    }
}

/// Parameters of the freshwater input that accompanies sea-level rise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeaLevelParameters {
    /// Salinity of the added meltwater
    /// unit: psu
    /// Default: 0.5
    pub freshwater_salinity: FloatValue,
}

impl Default for SeaLevelParameters {
    fn default() -> Self {
        Self {
            freshwater_salinity: 0.5,
        }
    }
}
