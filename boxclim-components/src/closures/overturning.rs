//! Density-driven overturning transport between the polar boxes and the equator.

use crate::parameters::OverturningParameters;
use boxclim_core::state::BoxState;
use boxclim_core::timeseries::FloatValue;

/// Overturning transport rates of the two polar boxes (1/day).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverturningFlux {
    /// Exchange rate between the upper polar box and the equator
    pub upper: FloatValue,
    /// Exchange rate between the lower polar box and the equator
    pub lower: FloatValue,
}

/// Overturning transport driven by the thermal and haline contrast of each polar box with the
/// equatorial box.
///
/// $$ q_u = k \left[\alpha (T_u - T_e) - \beta (S_u - S_e)\right] $$
/// $$ q_l = k \left[\alpha (T_l - T_e) - \beta (S_l - S_e)\right] $$
///
/// The ice thickness of `state` is not used.
pub fn overturning_flux(params: &OverturningParameters, state: &BoxState) -> OverturningFlux {
    let flux = |t: FloatValue, s: FloatValue| {
        params.k
            * (params.alpha * (t - state.equatorial_temperature)
                - params.beta * (s - state.equatorial_salinity))
    };

    OverturningFlux {
        upper: flux(state.upper_temperature, state.upper_salinity),
        lower: flux(state.lower_temperature, state.lower_salinity),
    }
}
