//! State vector of the three-box model and the derivative returned for it.
//!
//! The state is ordered `(T_u, T_l, T_e, S_u, S_l, S_e, h_ice)`:
//! temperatures (°C) and salinities (psu) of the upper polar, lower polar and equatorial boxes,
//! followed by the sea-ice thickness (m) over the upper polar box.

use crate::timeseries::FloatValue;
use nalgebra::Vector6;
use serde::{Deserialize, Serialize};

/// Rates of change for the six integrated box quantities.
///
/// Ordered `(T_u, T_l, T_e, S_u, S_l, S_e)`, in units per day.
pub type Rates = Vector6<FloatValue>;

/// Number of values in the state vector
pub const STATE_LEN: usize = 7;

/// Column labels of the state vector, in order
pub const STATE_LABELS: [&str; STATE_LEN] = ["T_u", "T_l", "T_e", "S_u", "S_l", "S_e", "h_ice"];

/// Instantaneous state of the box model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxState {
    /// Upper polar box temperature
    /// unit: °C
    pub upper_temperature: FloatValue,
    /// Lower polar box temperature
    /// unit: °C
    pub lower_temperature: FloatValue,
    /// Equatorial box temperature
    /// unit: °C
    pub equatorial_temperature: FloatValue,
    /// Upper polar box salinity
    /// unit: psu
    pub upper_salinity: FloatValue,
    /// Lower polar box salinity
    /// unit: psu
    pub lower_salinity: FloatValue,
    /// Equatorial box salinity
    /// unit: psu
    pub equatorial_salinity: FloatValue,
    /// Sea-ice thickness over the upper polar box
    /// unit: m
    pub ice_thickness: FloatValue,
}

impl Default for BoxState {
    /// The reference initial condition `(10, 10, 20, 35, 34, 34, 0)`.
    fn default() -> Self {
        Self {
            upper_temperature: 10.0,
            lower_temperature: 10.0,
            equatorial_temperature: 20.0,
            upper_salinity: 35.0,
            lower_salinity: 34.0,
            equatorial_salinity: 34.0,
            ice_thickness: 0.0,
        }
    }
}

impl BoxState {
    pub fn from_array(values: [FloatValue; STATE_LEN]) -> Self {
        let [t_u, t_l, t_e, s_u, s_l, s_e, h_ice] = values;
        Self {
            upper_temperature: t_u,
            lower_temperature: t_l,
            equatorial_temperature: t_e,
            upper_salinity: s_u,
            lower_salinity: s_l,
            equatorial_salinity: s_e,
            ice_thickness: h_ice,
        }
    }

    pub fn to_array(&self) -> [FloatValue; STATE_LEN] {
        [
            self.upper_temperature,
            self.lower_temperature,
            self.equatorial_temperature,
            self.upper_salinity,
            self.lower_salinity,
            self.equatorial_salinity,
            self.ice_thickness,
        ]
    }

    /// The six integrated quantities as a vector, in [`Rates`] order.
    pub fn integrated(&self) -> Rates {
        Rates::new(
            self.upper_temperature,
            self.lower_temperature,
            self.equatorial_temperature,
            self.upper_salinity,
            self.lower_salinity,
            self.equatorial_salinity,
        )
    }

    /// Advance the state by one explicit Euler step.
    ///
    /// The six box quantities move by `rate * dt`.
    /// The ice thickness is replaced by the absolute value carried in the derivative.
    pub fn apply(&mut self, derivative: &Derivative, dt: FloatValue) {
        let next = self.integrated() + derivative.rates * dt;

        self.upper_temperature = next[0];
        self.lower_temperature = next[1];
        self.equatorial_temperature = next[2];
        self.upper_salinity = next[3];
        self.lower_salinity = next[4];
        self.equatorial_salinity = next[5];
        self.ice_thickness = derivative.ice_thickness;
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Lowest of the three box salinities
    pub fn min_salinity(&self) -> FloatValue {
        self.upper_salinity
            .min(self.lower_salinity)
            .min(self.equatorial_salinity)
    }
}

/// Result of evaluating the model equations for a single day.
///
/// Sea ice is not integrated: the ice closure already produces the new thickness for the day,
/// so it is carried separately from the rates instead of sharing the rate vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    /// Rates of change of `(T_u, T_l, T_e, S_u, S_l, S_e)` per day
    pub rates: Rates,
    /// New absolute sea-ice thickness (m)
    pub ice_thickness: FloatValue,
}

impl Derivative {
    /// Flatten into the seven-slot layout of the state vector.
    ///
    /// The last slot holds the absolute ice thickness, not a rate.
    pub fn to_array(&self) -> [FloatValue; STATE_LEN] {
        let r = &self.rates;
        [r[0], r[1], r[2], r[3], r[4], r[5], self.ice_thickness]
    }
}
