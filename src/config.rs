//! Run configuration.
//!
//! A run is described by a TOML file. Every field is optional:
//!
//! ```toml
//! steps = 999
//! dt = 1.0
//! forcing = "data/forcing_annual.csv"
//! output = "trajectory.csv"
//!
//! [initial_state]
//! upper_temperature = 10.0
//! ice_thickness = 0.0
//!
//! [parameters.ice]
//! max_thickness = 20.0
//! ```

use boxclim_components::model::BoxModel;
use boxclim_components::parameters::BoxModelParameters;
use boxclim_core::errors::{BoxModelError, BoxModelResult};
use boxclim_core::forcing::PeriodicForcing;
use boxclim_core::ivp::{EulerSolver, Trajectory};
use boxclim_core::state::BoxState;
use boxclim_core::timeseries::{DayIndex, FloatValue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything needed to run the model once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of days to simulate
    pub steps: usize,
    /// Step size
    /// unit: day
    pub dt: FloatValue,
    /// CSV file with `T_atm_pole` and `T_atm_eq` columns
    pub forcing: Option<PathBuf>,
    /// Where to write the trajectory CSV, if anywhere
    pub output: Option<PathBuf>,
    pub initial_state: BoxState,
    pub parameters: BoxModelParameters,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 999,
            dt: 1.0,
            forcing: None,
            output: None,
            initial_state: BoxState::default(),
            parameters: BoxModelParameters::default(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> BoxModelResult<Self> {
        toml::from_str(text).map_err(|e| BoxModelError::Config(e.to_string()))
    }

    pub fn from_path(path: &Path) -> BoxModelResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> BoxModelResult<String> {
        toml::to_string(self).map_err(|e| BoxModelError::Config(e.to_string()))
    }

    /// Check the settings that the model equations cannot guard themselves.
    pub fn validate(&self) -> BoxModelResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(BoxModelError::Config(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !self.initial_state.is_finite() {
            return Err(BoxModelError::Config(
                "initial state must be finite".to_string(),
            ));
        }
        let state = &self.initial_state;
        if [
            state.upper_salinity,
            state.lower_salinity,
            state.equatorial_salinity,
        ]
        .iter()
        .any(|s| *s < 0.0)
        {
            return Err(BoxModelError::Config(
                "initial salinities must be non-negative".to_string(),
            ));
        }
        let max_ice = self.parameters.ice.max_thickness;
        if !(max_ice >= 0.0) {
            return Err(BoxModelError::Config(format!(
                "maximum ice thickness must be non-negative, got {}",
                max_ice
            )));
        }
        if !(0.0..=max_ice).contains(&state.ice_thickness) {
            return Err(BoxModelError::Config(format!(
                "initial ice thickness must lie in [0, {}], got {}",
                max_ice, state.ice_thickness
            )));
        }
        Ok(())
    }

    /// Load the forcing series named by the configuration.
    pub fn load_forcing(&self) -> BoxModelResult<PeriodicForcing> {
        let path = self
            .forcing
            .as_ref()
            .ok_or_else(|| BoxModelError::Config("no forcing file given".to_string()))?;
        PeriodicForcing::from_csv_path(path)
    }

    /// Run the configured number of steps with `forcing`.
    ///
    /// `observer` receives every new state as it is produced.
    pub fn run_with<F>(&self, forcing: PeriodicForcing, observer: F) -> BoxModelResult<Trajectory>
    where
        F: FnMut(DayIndex, &BoxState),
    {
        self.validate()?;
        let model = BoxModel::from_parameters(self.parameters.clone(), forcing);
        let mut solver = EulerSolver::new(&model, self.initial_state, self.dt);
        solver.integrate_with(self.steps, observer)
    }
}
