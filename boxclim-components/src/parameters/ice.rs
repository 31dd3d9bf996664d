//! Sea-Ice Parameters
//!
//! Parameters for the thermodynamic growth and melt of sea ice over the upper polar box,
//! including the insulation of the ocean by thick ice.

use boxclim_core::timeseries::{FloatValue, SECONDS_PER_DAY};
use serde::{Deserialize, Serialize};

/// Thermodynamic properties of sea ice over the upper polar box.
///
/// Thermal conductivity really depends on temperature and latent heat on salinity;
/// both are held constant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IceParameters {
    /// Thermal conductivity of ice
    /// unit: W m^-1 K^-1
    /// Default: 2.2
    pub conductivity: FloatValue,

    /// Latent heat of fusion
    /// unit: J / kg
    /// Default: 334000.0
    pub latent_heat: FloatValue,

    /// Density of ice at 0 °C
    /// unit: kg / m^3
    /// Default: 916.0
    pub density: FloatValue,

    /// Salinity retained in the ice
    /// unit: psu
    /// Default: 5.0
    pub salinity: FloatValue,

    /// Melting point of the ice
    /// unit: °C
    /// Default: 0.0
    pub melting_temperature: FloatValue,

    /// Upper bound of the ice thickness
    /// unit: m
    /// Default: 20.0
    pub max_thickness: FloatValue,

    /// Thickness at which ice fully insulates the ocean from the atmosphere
    /// unit: m
    /// Default: 5.0
    pub insulation_thickness: FloatValue,
}

impl Default for IceParameters {
    fn default() -> Self {
        Self {
            conductivity: 2.2,
            latent_heat: 334000.0,
            density: 916.0,
            salinity: 5.0,
            melting_temperature: 0.0,
            max_thickness: 20.0,
            insulation_thickness: 5.0,
        }
    }
}

impl IceParameters {
    /// Coefficient of the one-dimensional conduction growth law.
    ///
    /// $$ c = \frac{2 k_{ice}}{L \rho_{ice}} $$
    ///
    /// unit: m^2 K^-1 s^-1
    pub fn growth_coefficient(&self) -> FloatValue {
        2.0 * self.conductivity / (self.latent_heat * self.density)
    }

    /// Change in thickness over one day for a temperature contrast `delta_t` (K).
    ///
    /// $$ |G| = \sqrt{c \, |\Delta T| \, 86400} $$
    pub fn daily_thickness_change(&self, delta_t: FloatValue) -> FloatValue {
        (self.growth_coefficient() * delta_t.abs() * SECONDS_PER_DAY).sqrt()
    }

    /// Fraction of atmospheric heat exchange that passes through ice of thickness `h`.
    ///
    /// $$ f = \max\left(0, 1 - \frac{h}{h_{ins}}\right) $$
    pub fn insulation_factor(&self, thickness: FloatValue) -> FloatValue {
        (1.0 - thickness / self.insulation_thickness).max(0.0)
    }
}
