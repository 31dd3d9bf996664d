//! Model equations of the three-box ocean/atmosphere/sea-ice system.
//!
//! # What This Component Does
//!
//! 1. Looks up the polar and equatorial air temperatures for the day
//! 2. Evaluates the overturning transport and the vertical mixing rate
//! 3. Grows or melts sea ice, which also exchanges salt with the upper polar box
//! 4. Freshens the upper polar box by sea-level rise
//! 5. Combines these into rates of change for the six box quantities
//!
//! # Equations
//!
//! With overturning rates $q_u, q_l$, mixing rate $\gamma$, relaxation rates $a$ (heat) and
//! $c$ (salt), and the ice insulation factor $f(h) = \max(0, 1 - h/h_{ins})$:
//!
//! $$ \dot T_e = a (T^{atm}_e - T_e) - q_u (T_u - T_e) + q_l (T_l - T_e) $$
//! $$ \dot T_u = a f(h) (T^{atm}_p - T_u) + q_u (T_u - T_e) + \gamma (T_l - T_u) $$
//! $$ \dot T_l = -q_l (T_l - T_e) - \gamma (T_l - T_u) $$
//! $$ \dot S_e = c (S^{eq}_e - S_e) - q_u (S_u - S_e) + q_l (S_l - S_e) $$
//! $$ \dot S_u = q_u (S_u - S_e) + \gamma (S_l - S_u) + \Delta S_{ice} + \Delta S_{slr} $$
//! $$ \dot S_l = -q_l (S_l - S_e) - \gamma (S_l - S_u) $$
//!
//! The insulation factor uses the ice thickness after the day's growth or melt.

use crate::closures::{
    ice_step, overturning_flux, sea_level_dilution, vertical_mixing_rate, IceStep,
    OverturningFlux,
};
use crate::parameters::BoxModelParameters;
use boxclim_core::errors::BoxModelResult;
use boxclim_core::forcing::ForcingProvider;
use boxclim_core::ivp::DerivativeFunction;
use boxclim_core::state::{BoxState, Derivative, Rates};
use boxclim_core::timeseries::{DayIndex, FloatValue};
use log::trace;

/// Intermediate terms of the model equations for a single day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub day: DayIndex,
    /// Polar air temperature (°C)
    pub polar_air_temperature: FloatValue,
    /// Equatorial air temperature (°C)
    pub equatorial_air_temperature: FloatValue,
    /// Overturning rates (1/day)
    pub overturning: OverturningFlux,
    /// Vertical mixing rate between the polar boxes (1/day)
    pub mixing_rate: FloatValue,
    pub ice: IceStep,
    /// Salinity change from sea-level rise (psu)
    pub sea_level_salinity_change: FloatValue,
    /// Fraction of atmospheric heat exchange reaching the upper polar box
    pub insulation_factor: FloatValue,
}

/// The three-box model driven by an atmospheric forcing provider.
#[derive(Debug, Clone)]
pub struct BoxModel<F: ForcingProvider> {
    parameters: BoxModelParameters,
    forcing: F,
}

impl<F: ForcingProvider> BoxModel<F> {
    pub fn from_parameters(parameters: BoxModelParameters, forcing: F) -> Self {
        Self {
            parameters,
            forcing,
        }
    }

    /// Evaluate the closures for `state` on `day`.
    ///
    /// # Errors
    ///
    /// Propagates [`boxclim_core::errors::BoxModelError::FrozenSolid`] from the ice closure.
    pub fn diagnose(&self, day: DayIndex, state: &BoxState) -> BoxModelResult<Diagnostics> {
        let p = &self.parameters;

        let polar_air_temperature = self.forcing.get_polar_forcing(day);
        let equatorial_air_temperature = self.forcing.get_equatorial_forcing(day);

        let overturning = overturning_flux(&p.overturning, state);
        let mixing_rate = vertical_mixing_rate(
            &p.mixing,
            state.upper_temperature,
            state.lower_temperature,
            state.upper_salinity,
            state.lower_salinity,
        );

        let ice = ice_step(
            &p.ice,
            &p.geometry,
            state.upper_temperature,
            polar_air_temperature,
            state.upper_salinity,
            state.ice_thickness,
            day,
        )?;
        let sea_level_salinity_change =
            sea_level_dilution(&p.sea_level, &p.geometry, state.upper_salinity, day);

        Ok(Diagnostics {
            day,
            polar_air_temperature,
            equatorial_air_temperature,
            overturning,
            mixing_rate,
            ice,
            sea_level_salinity_change,
            insulation_factor: p.ice.insulation_factor(ice.thickness),
        })
    }

    /// Combine the closure terms into rates of change.
    fn rates(&self, state: &BoxState, d: &Diagnostics) -> Rates {
        let relax = &self.parameters.relaxation;
        let q_u = d.overturning.upper;
        let q_l = d.overturning.lower;
        let gamma = d.mixing_rate;

        let (t_u, t_l, t_e) = (
            state.upper_temperature,
            state.lower_temperature,
            state.equatorial_temperature,
        );
        let (s_u, s_l, s_e) = (
            state.upper_salinity,
            state.lower_salinity,
            state.equatorial_salinity,
        );

        let dt_e = relax.temperature_rate * (d.equatorial_air_temperature - t_e) - q_u * (t_u - t_e)
            + q_l * (t_l - t_e);
        let dt_u = relax.temperature_rate * d.insulation_factor * (d.polar_air_temperature - t_u)
            + q_u * (t_u - t_e)
            + gamma * (t_l - t_u);
        let dt_l = -q_l * (t_l - t_e) - gamma * (t_l - t_u);

        let ds_e = relax.salinity_rate * (relax.equatorial_salinity - s_e) - q_u * (s_u - s_e)
            + q_l * (s_l - s_e);
        let ds_u = q_u * (s_u - s_e)
            + gamma * (s_l - s_u)
            + d.ice.salinity_change
            + d.sea_level_salinity_change;
        let ds_l = -q_l * (s_l - s_e) - gamma * (s_l - s_u);

        Rates::new(dt_u, dt_l, dt_e, ds_u, ds_l, ds_e)
    }
}

impl<F: ForcingProvider> DerivativeFunction for BoxModel<F> {
    fn calculate_derivative(&self, day: DayIndex, state: &BoxState) -> BoxModelResult<Derivative> {
        let diagnostics = self.diagnose(day, state)?;
        trace!(
            "day {}: q_u={:e} q_l={:e} gamma={:e} h_ice={} dS_ice={:e} dS_slr={:e}",
            day,
            diagnostics.overturning.upper,
            diagnostics.overturning.lower,
            diagnostics.mixing_rate,
            diagnostics.ice.thickness,
            diagnostics.ice.salinity_change,
            diagnostics.sea_level_salinity_change
        );

        Ok(Derivative {
            rates: self.rates(state, &diagnostics),
            ice_thickness: diagnostics.ice.thickness,
        })
    }
}
