//! Equation of state for seawater.
//!
//! Two density formulations are used by the model:
//!
//! - [`density_of_seawater`]: the full UNESCO EOS-80 polynomial, giving absolute density.
//! - [`density_difference`]: a linear approximation of the density contrast between two water
//!   masses, used only to set the strength of vertical mixing.
//!
//! # References
//!
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Millero & Poisson (1981): International one-atmosphere equation of state of seawater.
//!
//! # Units
//!
//! - Temperature: °C
//! - Salinity: psu
//! - Pressure: dbar (1 dbar ≈ 1 m depth)
//! - Density: kg/m³
//!
//! No range checks are performed. The polynomials are defined for any real input but are only
//! meaningful over oceanographic ranges (roughly -2..40 °C, 0..42 psu, 0..10000 dbar).

use crate::parameters::DensityDifferenceParameters;
use boxclim_core::timeseries::FloatValue;

/// Density of pure water at one standard atmosphere (kg/m³).
fn pure_water_density(t: FloatValue) -> FloatValue {
    999.842594 + 6.793952e-2 * t - 9.095290e-3 * t.powi(2) + 1.001685e-4 * t.powi(3)
        - 1.120083e-6 * t.powi(4)
        + 6.536332e-9 * t.powi(5)
}

/// Density of seawater at one standard atmosphere (kg/m³).
fn surface_density(t: FloatValue, s: FloatValue) -> FloatValue {
    let s15 = s * s.sqrt();

    pure_water_density(t)
        + s * (0.824493 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
            + 5.3875e-9 * t.powi(4))
        + s15 * (-5.72466e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2))
        + 4.8314e-4 * s * s
}

/// Secant bulk modulus of seawater (bar), with pressure `p` in bar.
fn secant_bulk_modulus(t: FloatValue, s: FloatValue, p: FloatValue) -> FloatValue {
    let s15 = s * s.sqrt();

    let k_water = 19652.21 + 148.4206 * t - 2.327105 * t.powi(2) + 1.360477e-2 * t.powi(3)
        - 5.155288e-5 * t.powi(4);

    let k_surface = k_water
        + s * (54.6746 - 0.603459 * t + 1.09987e-2 * t.powi(2) - 6.1670e-5 * t.powi(3))
        + s15 * (7.944e-2 + 1.6483e-2 * t - 5.3009e-4 * t.powi(2));

    k_surface
        + p * (3.239908 + 1.43713e-3 * t + 1.16092e-4 * t.powi(2) - 5.77905e-7 * t.powi(3))
        + p * s * (2.2838e-3 - 1.0981e-5 * t - 1.6078e-6 * t.powi(2))
        + 1.91075e-4 * p * s15
        + p.powi(2) * (8.50935e-5 - 6.12293e-6 * t + 5.2787e-8 * t.powi(2))
        + p.powi(2) * s * (-9.9348e-7 + 2.0816e-8 * t + 9.1697e-10 * t.powi(2))
}

/// Density of seawater (kg/m³) following UNESCO EOS-80.
///
/// $$ \rho(S, T, p) = \frac{\rho(S, T, 0)}{1 - p / K(S, T, p)} $$
///
/// where $K$ is the secant bulk modulus. `pressure` is given in dbar and converted to bar
/// before it enters the bulk modulus.
///
/// # Arguments
///
/// * `temperature` - Temperature (°C)
/// * `salinity` - Salinity (psu)
/// * `pressure` - Pressure (dbar)
pub fn density_of_seawater(
    temperature: FloatValue,
    salinity: FloatValue,
    pressure: FloatValue,
) -> FloatValue {
    let p = pressure / 10.0;
    let rho_surface = surface_density(temperature, salinity);

    rho_surface / (1.0 - p / secant_bulk_modulus(temperature, salinity, p))
}

/// Linearised density difference (kg/m³) between water masses 1 and 2.
///
/// $$ \Delta\rho = -\alpha (T_1 - T_2) + \beta (S_1 - S_2) $$
///
/// Only an approximation of the stratification between two boxes; not a substitute for
/// [`density_of_seawater`].
pub fn density_difference(
    params: &DensityDifferenceParameters,
    t1: FloatValue,
    t2: FloatValue,
    s1: FloatValue,
    s2: FloatValue,
) -> FloatValue {
    -params.alpha * (t1 - t2) + params.beta * (s1 - s2)
}
