//! End-to-end behaviour of the box model.
//!
//! These tests exercise the closures and the time stepping together:
//! - Reference scenarios for the individual closures
//! - Multi-year integrations under a seasonal cycle

use approx::assert_relative_eq;
use boxclim_components::closures::{ice_step, sea_level_dilution, vertical_mixing_rate};
use boxclim_components::model::BoxModel;
use boxclim_components::parameters::{
    BoxGeometry, BoxModelParameters, IceParameters, MixingParameters, SeaLevelParameters,
};
use boxclim_core::forcing::{ForcingProvider, PeriodicForcing};
use boxclim_core::ivp::{DerivativeFunction, EulerSolver};
use boxclim_core::state::BoxState;
use boxclim_core::timeseries::FloatValue;

/// A sinusoidal annual cycle: polar air from -25 °C (day 1) to +5 °C mid-year.
fn seasonal_forcing() -> PeriodicForcing {
    let phase = |d: usize| (2.0 * std::f64::consts::PI * d as FloatValue / 365.0).cos();
    let polar = (0..365).map(|d| -10.0 - 15.0 * phase(d)).collect();
    let equatorial = (0..365).map(|d| 26.0 - 2.0 * phase(d)).collect();
    PeriodicForcing::from_values(polar, equatorial).unwrap()
}

mod closure_scenarios {
    use super::*;

    #[test]
    fn test_reference_state_day_one() {
        let model = BoxModel::from_parameters(BoxModelParameters::default(), seasonal_forcing());
        let derivative = model
            .calculate_derivative(1, &BoxState::default())
            .expect("Reference state should evaluate");

        let ice = derivative.to_array()[6];
        assert!(ice.is_finite());
        assert!((0.0..=20.0).contains(&ice), "Ice thickness {} out of range", ice);
    }

    #[test]
    fn test_unstratified_mixing_is_positive() {
        let gamma = vertical_mixing_rate(&MixingParameters::default(), 5.0, 5.0, 34.0, 34.0);

        assert!(gamma.is_finite());
        assert!(gamma > 0.0);
    }

    #[test]
    fn test_freezing_regime() {
        let geometry = BoxGeometry {
            sea_level_rise_rate: 0.0001,
            ..Default::default()
        };
        let result = ice_step(
            &IceParameters::default(),
            &geometry,
            -5.0,
            -10.0,
            34.0,
            0.0,
            1,
        )
        .unwrap();

        assert!(result.thickness > 0.0);
        // Brine rejection raises the upper-box salinity
        assert!(result.salinity_change >= 0.0);
    }

    #[test]
    fn test_melting_regime() {
        let geometry = BoxGeometry {
            sea_level_rise_rate: 0.0001,
            ..Default::default()
        };
        let result = ice_step(
            &IceParameters::default(),
            &geometry,
            5.0,
            10.0,
            34.0,
            10.0,
            1,
        )
        .unwrap();

        assert!(result.thickness < 10.0);
        assert!(result.salinity_change < 0.0);
    }

    #[test]
    fn test_no_sea_level_rise_no_dilution() {
        let geometry = BoxGeometry {
            sea_level_rise_rate: 0.0,
            ..Default::default()
        };
        for s in [10.0, 34.0, 36.5] {
            for day in [1, 1000, 36500] {
                assert_eq!(
                    sea_level_dilution(&SeaLevelParameters::default(), &geometry, s, day),
                    0.0
                );
            }
        }
    }

    #[test]
    fn test_forcing_repeats_yearly() {
        let forcing = seasonal_forcing();

        for day in [1, 90, 200, 365] {
            for k in 1..5 {
                assert_eq!(
                    forcing.get_polar_forcing(day),
                    forcing.get_polar_forcing(day + 365 * k)
                );
            }
        }
    }
}

mod integration {
    use super::*;

    #[test]
    fn test_zero_steps_round_trip() {
        let model = BoxModel::from_parameters(BoxModelParameters::default(), seasonal_forcing());
        let initial = BoxState::default();

        let trajectory = EulerSolver::new(&model, initial, 1.0).integrate(0).unwrap();

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.last(), Some(&initial));
    }

    #[test]
    fn test_reference_run_stays_physical() {
        let model = BoxModel::from_parameters(BoxModelParameters::default(), seasonal_forcing());
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        let trajectory = solver.integrate(999).unwrap();

        assert_eq!(trajectory.len(), 1000);
        for (day, state) in trajectory.iter() {
            assert!(state.is_finite(), "Non-finite state on day {}", day);
            assert!(
                (0.0..=20.0).contains(&state.ice_thickness),
                "Ice thickness {} out of range on day {}",
                state.ice_thickness,
                day
            );
            for s in [
                state.upper_salinity,
                state.lower_salinity,
                state.equatorial_salinity,
            ] {
                assert!(s >= 0.0, "Negative salinity {} on day {}", s, day);
            }
        }
    }

    #[test]
    fn test_seasonal_ice_cycle() {
        let model = BoxModel::from_parameters(BoxModelParameters::default(), seasonal_forcing());
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        let trajectory = solver.integrate(365).unwrap();
        let thickness: Vec<FloatValue> =
            trajectory.states().iter().map(|s| s.ice_thickness).collect();

        // Ice forms in the cold first half of the year
        assert!(thickness[30] > 0.0);
        // and thins while the polar air is above freezing
        assert!(thickness[130] > thickness[180]);
        assert!(thickness[180] > thickness[230]);
        // then regrows once winter returns
        assert!(thickness[300] > thickness[230]);
    }

    #[test]
    fn test_equator_relaxes_to_constant_forcing() {
        let mut params = BoxModelParameters::default();
        params.overturning.k = 0.0;
        let model = BoxModel::from_parameters(params, PeriodicForcing::constant(5.0, 25.0));
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        let trajectory = solver.integrate(10 * 365).unwrap();
        let last = trajectory.last().unwrap();

        // e-folding time of one year, ten years integrated
        assert_relative_eq!(last.equatorial_temperature, 25.0, epsilon = 1e-3);
        // Salinity relaxes on a ten-year time scale towards 35.2 psu
        assert!(last.equatorial_salinity > 34.0 && last.equatorial_salinity < 35.2);
    }

    #[test]
    fn test_sea_level_rise_freshens_upper_box() {
        let mut params = BoxModelParameters::default();
        params.overturning.k = 0.0;
        params.mixing.tau_max = 1.0e12;
        params.mixing.tau_min = 0.0;
        let model = BoxModel::from_parameters(params, PeriodicForcing::constant(5.0, 25.0));
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        let trajectory = solver.integrate(100).unwrap();

        assert!(trajectory.last().unwrap().upper_salinity < 35.0);
    }
}
