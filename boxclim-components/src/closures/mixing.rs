//! Stratification-dependent vertical mixing between the upper and lower polar boxes.

use crate::eos::{density_difference, density_of_seawater};
use crate::parameters::MixingParameters;
use boxclim_core::timeseries::FloatValue;
use log::warn;

/// Vertical mixing rate between the polar boxes (1/day).
///
/// The mixing time scale grows linearly with the density difference between the boxes:
///
/// $$ m = \frac{\tau_{max} - \tau_{min}}{f_{span} \, \rho_b} $$
/// $$ \tau = m \, \Delta\rho + m \, f_{base} \, \rho_b $$
/// $$ \gamma = \frac{1}{2 \tau} $$
///
/// where $\Delta\rho$ is the linearised upper-minus-lower density difference and $\rho_b$ is the
/// density of the lower box at the reference pressure. Stronger stratification means a longer
/// time scale and weaker mixing. With no stratification $\tau = f_{base} (\tau_{max} - \tau_{min}) / f_{span}$.
///
/// A non-positive or non-finite time scale means the model has left its valid regime.
/// The rate is still returned unchanged, and a warning is logged.
pub fn vertical_mixing_rate(
    params: &MixingParameters,
    t_upper: FloatValue,
    t_lower: FloatValue,
    s_upper: FloatValue,
    s_lower: FloatValue,
) -> FloatValue {
    let drho = density_difference(&params.density, t_upper, t_lower, s_upper, s_lower);
    let rho_b = density_of_seawater(t_lower, s_lower, params.reference_pressure);

    let m = (params.tau_max - params.tau_min) / (params.density_span_fraction * rho_b);
    let tau = m * drho + m * params.baseline_fraction * rho_b;

    if !tau.is_finite() || tau <= 0.0 {
        warn!(
            "Degenerate vertical mixing time scale tau={} (drho={}, rho_b={})",
            tau, drho, rho_b
        );
    }

    1.0 / (2.0 * tau)
}
