//! Freshening of the upper polar box by sea-level rise.

use crate::parameters::{BoxGeometry, SeaLevelParameters};
use boxclim_core::timeseries::{DayIndex, FloatValue};

/// Change in upper-box salinity (psu) from one day of freshwater input.
///
/// A layer of thickness $r$ (the daily sea-level rise) and salinity $S_f$ mixes into the box of
/// depth $D(n)$:
///
/// $$ S' = \frac{D(n) S_u + r S_f}{D(n) + r} \qquad \Delta S = S' - S_u = \frac{r (S_f - S_u)}{D(n) + r} $$
///
/// With no sea-level rise the change is exactly zero.
pub fn sea_level_dilution(
    params: &SeaLevelParameters,
    geometry: &BoxGeometry,
    s_upper: FloatValue,
    day: DayIndex,
) -> FloatValue {
    let rate = geometry.sea_level_rise_rate;
    let depth = geometry.depth_at(day);

    rate * (params.freshwater_salinity - s_upper) / (depth + rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_rise_no_change() {
        let params = SeaLevelParameters::default();
        let geometry = BoxGeometry {
            sea_level_rise_rate: 0.0,
            ..Default::default()
        };

        for s in [0.0, 0.5, 34.0, 35.2, 40.0] {
            for day in [1, 365, 100_000] {
                assert_eq!(sea_level_dilution(&params, &geometry, s, day), 0.0);
            }
        }
    }

    #[test]
    fn freshwater_dilutes_salty_box() {
        let params = SeaLevelParameters::default();
        let geometry = BoxGeometry::default();

        let delta = sea_level_dilution(&params, &geometry, 35.0, 1);

        assert!(delta < 0.0);
        // 1e-4 * (0.5 - 35) / (100.0001 + 1e-4)
        assert_relative_eq!(delta, 1.0e-4 * -34.5 / 100.0002, max_relative = 1e-12);
    }

    #[test]
    fn matches_mass_balance() {
        let params = SeaLevelParameters::default();
        let geometry = BoxGeometry::default();
        let s = 34.2;
        let day = 730;

        let depth = geometry.depth_at(day);
        let rate = geometry.sea_level_rise_rate;
        let mixed = (depth * s + rate * params.freshwater_salinity) / (depth + rate);

        assert_relative_eq!(
            sea_level_dilution(&params, &geometry, s, day),
            mixed - s,
            epsilon = 1e-12
        );
    }

    #[test]
    fn water_at_freshwater_salinity_is_unchanged() {
        let params = SeaLevelParameters::default();
        let geometry = BoxGeometry::default();

        assert_eq!(sea_level_dilution(&params, &geometry, 0.5, 12), 0.0);
    }
}
