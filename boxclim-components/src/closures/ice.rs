//! Sea-ice growth and melt over the upper polar box.

use crate::parameters::{BoxGeometry, IceParameters};
use boxclim_core::errors::{BoxModelError, BoxModelResult};
use boxclim_core::timeseries::{DayIndex, FloatValue};

/// Outcome of one day of ice growth or melt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceStep {
    /// Change in upper-box salinity from brine rejection or meltwater (psu)
    pub salinity_change: FloatValue,
    /// Ice thickness at the end of the day (m)
    pub thickness: FloatValue,
}

/// Grow or melt ice for one day.
///
/// The regime is chosen by the air temperature relative to the melting point $T_m$:
///
/// - $T_{atm} < T_m$: ice grows by $G = \sqrt{c \, |T_m - T_{atm} - T_u| \, 86400}$
/// - otherwise: ice melts by $G = -\sqrt{c \, |T_m - T_{atm}| \, 86400}$
///
/// where $c$ is [`IceParameters::growth_coefficient`]. The new thickness is clamped to
/// `[0, max_thickness]` and the realised change $G_{eff} = h_{new} - h_{prev}$ sets the salt
/// exchanged with the liquid water below the ice:
///
/// $$ W = D(n) - h_{new} $$
/// $$ \Delta S = \frac{G_{eff} (S_u - S_{ice})}{W} $$
///
/// Freezing seawater saltier than the ice rejects brine ($\Delta S > 0$);
/// melting releases fresher water ($\Delta S < 0$).
///
/// Freezing water fresher than the ice ($S_u < S_{ice}$) draws salt out of the box. Left long
/// enough this drives $S_u$ below zero, which the solver reports as
/// [`BoxModelError::NegativeSalinity`].
///
/// # Errors
///
/// - [`BoxModelError::Config`] if `max_thickness` is negative or NaN
/// - [`BoxModelError::FrozenSolid`] if the ice leaves no liquid water in the box ($W \le 0$)
pub fn ice_step(
    params: &IceParameters,
    geometry: &BoxGeometry,
    t_upper: FloatValue,
    t_atm: FloatValue,
    s_upper: FloatValue,
    previous_thickness: FloatValue,
    day: DayIndex,
) -> BoxModelResult<IceStep> {
    if !(params.max_thickness >= 0.0) {
        return Err(BoxModelError::Config(format!(
            "maximum ice thickness must be non-negative, got {}",
            params.max_thickness
        )));
    }
    let t_melt = params.melting_temperature;

    let growth = if t_atm < t_melt {
        params.daily_thickness_change(t_melt - t_atm - t_upper)
    } else {
        -params.daily_thickness_change(t_melt - t_atm)
    };

    let thickness = (previous_thickness + growth).clamp(0.0, params.max_thickness);
    let effective_growth = thickness - previous_thickness;

    let water_depth = geometry.depth_at(day) - thickness;
    if water_depth <= 0.0 {
        return Err(BoxModelError::FrozenSolid {
            day,
            ice_thickness: thickness,
            water_depth,
        });
    }

    Ok(IceStep {
        salinity_change: effective_growth * (s_upper - params.salinity) / water_depth,
        thickness,
    })
}
