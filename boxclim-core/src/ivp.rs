//! Fixed-step time integration of the box model.
//!
//! Each simulated day is one evaluation of the model equations followed by one explicit Euler
//! update of the state:
//!
//! $$ y_{n+1} = y_n + \Delta t \, f(y_n, n+1) $$
//!
//! The sea-ice thickness is the exception: the model equations return its new value directly,
//! so it is assigned rather than integrated (see [`BoxState::apply`]).

use crate::errors::{BoxModelError, BoxModelResult};
use crate::state::{BoxState, Derivative, STATE_LABELS};
use crate::timeseries::{DayIndex, FloatValue};
use log::{debug, info};
use std::io::Write;

/// The right-hand side of the model equations.
pub trait DerivativeFunction {
    /// Evaluate the model equations for `state` on simulation day `day`.
    fn calculate_derivative(&self, day: DayIndex, state: &BoxState) -> BoxModelResult<Derivative>;
}

/// States recorded by the solver, starting from the initial condition at day 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    days: Vec<DayIndex>,
    states: Vec<BoxState>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: DayIndex, state: BoxState) {
        self.days.push(day);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn days(&self) -> &[DayIndex] {
        &self.days
    }

    pub fn states(&self) -> &[BoxState] {
        &self.states
    }

    /// The most recently recorded state
    pub fn last(&self) -> Option<&BoxState> {
        self.states.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayIndex, &BoxState)> {
        self.days.iter().copied().zip(self.states.iter())
    }

    /// Write the trajectory as CSV with one row per recorded day.
    pub fn write_csv<W: Write>(&self, writer: W) -> BoxModelResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["day"];
        header.extend(STATE_LABELS);
        csv_writer.write_record(&header)?;

        for (day, state) in self.iter() {
            let mut record = vec![day.to_string()];
            record.extend(state.to_array().iter().map(|v| v.to_string()));
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Explicit Euler integrator with a fixed step.
pub struct EulerSolver<'a, D: DerivativeFunction> {
    model: &'a D,
    state: BoxState,
    day: DayIndex,
    dt: FloatValue,
}

impl<'a, D: DerivativeFunction> EulerSolver<'a, D> {
    /// Create a solver positioned at day 0 with `initial_state`.
    pub fn new(model: &'a D, initial_state: BoxState, dt: FloatValue) -> Self {
        Self {
            model,
            state: initial_state,
            day: 0,
            dt,
        }
    }

    pub fn state(&self) -> &BoxState {
        &self.state
    }

    /// The last day that has been simulated (0 before the first step)
    pub fn day(&self) -> DayIndex {
        self.day
    }

    /// Advance the state by a single day.
    ///
    /// The update is atomic: if the model equations fail, or the new state is non-finite or has a
    /// negative salinity, the state is left untouched.
    pub fn step(&mut self) -> BoxModelResult<&BoxState> {
        let day = self.day + 1;
        let derivative = self.model.calculate_derivative(day, &self.state)?;

        let mut next = self.state;
        next.apply(&derivative, self.dt);
        if !next.is_finite() {
            return Err(BoxModelError::NonFiniteState { day });
        }
        let salinity = next.min_salinity();
        if salinity < 0.0 {
            return Err(BoxModelError::NegativeSalinity { day, salinity });
        }

        self.state = next;
        self.day = day;
        Ok(&self.state)
    }

    /// Run `n_steps` days, recording every state.
    pub fn integrate(&mut self, n_steps: usize) -> BoxModelResult<Trajectory> {
        self.integrate_with(n_steps, |_, _| {})
    }

    /// Run `n_steps` days, recording every state and passing each new state to `observer`.
    pub fn integrate_with<F>(&mut self, n_steps: usize, mut observer: F) -> BoxModelResult<Trajectory>
    where
        F: FnMut(DayIndex, &BoxState),
    {
        info!(
            "Integrating {} steps of {} day(s) from day {}",
            n_steps, self.dt, self.day
        );

        let mut trajectory = Trajectory::new();
        trajectory.push(self.day, self.state);

        for _ in 0..n_steps {
            let state = *self.step()?;
            debug!("day {}: {:?}", self.day, state.to_array());
            observer(self.day, &state);
            trajectory.push(self.day, state);
        }

        info!("Finished at day {}", self.day);
        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rates;
    use approx::assert_relative_eq;

    /// Constant rates with an ice thickness that tracks the day number
    struct ConstantRates {
        rates: Rates,
    }

    impl DerivativeFunction for ConstantRates {
        fn calculate_derivative(
            &self,
            day: DayIndex,
            _state: &BoxState,
        ) -> BoxModelResult<Derivative> {
            Ok(Derivative {
                rates: self.rates,
                ice_thickness: day as FloatValue * 0.1,
            })
        }
    }

    /// Fails once the simulation reaches a given day
    struct FailsOnDay(DayIndex);

    impl DerivativeFunction for FailsOnDay {
        fn calculate_derivative(
            &self,
            day: DayIndex,
            _state: &BoxState,
        ) -> BoxModelResult<Derivative> {
            if day >= self.0 {
                return Err(BoxModelError::FrozenSolid {
                    day,
                    ice_thickness: 100.0,
                    water_depth: 0.0,
                });
            }
            Ok(Derivative {
                rates: Rates::from_element(1.0),
                ice_thickness: 0.0,
            })
        }
    }

    #[test]
    fn zero_steps_returns_initial_state() {
        let model = ConstantRates {
            rates: Rates::from_element(1.0),
        };
        let initial = BoxState::default();
        let mut solver = EulerSolver::new(&model, initial, 1.0);

        let trajectory = solver.integrate(0).unwrap();

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.days(), &[0]);
        assert_eq!(trajectory.last(), Some(&initial));
        assert_eq!(solver.state(), &initial);
    }

    #[test]
    fn euler_update_is_linear_in_steps() {
        let model = ConstantRates {
            rates: Rates::new(0.5, -0.5, 0.0, 0.01, 0.0, -0.01),
        };
        let mut solver = EulerSolver::new(&model, BoxState::default(), 2.0);

        let trajectory = solver.integrate(10).unwrap();
        let last = trajectory.last().unwrap();

        assert_eq!(trajectory.len(), 11);
        assert_eq!(solver.day(), 10);
        assert_relative_eq!(last.upper_temperature, 20.0, epsilon = 1e-10);
        assert_relative_eq!(last.lower_temperature, 0.0, epsilon = 1e-10);
        assert_relative_eq!(last.upper_salinity, 35.2, epsilon = 1e-10);
        assert_relative_eq!(last.equatorial_salinity, 33.8, epsilon = 1e-10);
        // Ice is assigned from the last evaluation, not accumulated
        assert_relative_eq!(last.ice_thickness, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn observer_sees_every_day() {
        let model = ConstantRates {
            rates: Rates::zeros(),
        };
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);
        let mut seen = Vec::new();

        solver
            .integrate_with(5, |day, _| seen.push(day))
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn failure_leaves_state_untouched() {
        let model = FailsOnDay(3);
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        let result = solver.integrate(5);

        assert!(matches!(
            result,
            Err(BoxModelError::FrozenSolid { day: 3, .. })
        ));
        assert_eq!(solver.day(), 2);
        assert_relative_eq!(solver.state().upper_temperature, 12.0);
    }

    #[test]
    fn non_finite_state_is_an_error() {
        let model = ConstantRates {
            rates: Rates::from_element(FloatValue::INFINITY),
        };
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        assert!(matches!(
            solver.step(),
            Err(BoxModelError::NonFiniteState { day: 1 })
        ));
    }

    #[test]
    fn negative_salinity_is_an_error() {
        let model = ConstantRates {
            rates: Rates::new(0.0, 0.0, 0.0, -20.0, 0.0, 0.0),
        };
        let mut solver = EulerSolver::new(&model, BoxState::default(), 1.0);

        solver.step().unwrap();
        let result = solver.step();

        match result {
            Err(BoxModelError::NegativeSalinity { day, salinity }) => {
                assert_eq!(day, 2);
                assert_relative_eq!(salinity, -5.0);
            }
            other => panic!("Expected negative salinity error, got {:?}", other),
        }
        assert_eq!(solver.day(), 1);
        assert_relative_eq!(solver.state().upper_salinity, 15.0);
    }

    #[test]
    fn writes_csv_with_header() {
        let mut trajectory = Trajectory::new();
        trajectory.push(0, BoxState::default());

        let mut buffer = Vec::new();
        trajectory.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("day,T_u,T_l,T_e,S_u,S_l,S_e,h_ice"));
        assert_eq!(lines.next(), Some("0,10,10,20,35,34,34,0"));
    }
}
