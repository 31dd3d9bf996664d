//! Atmospheric boundary conditions.
//!
//! The model is driven by two prescribed air temperatures: one over the polar boxes and one over
//! the equatorial box. Both come from a daily series covering a single calendar year, which is
//! repeated indefinitely so that day `d` and day `d + 365 k` always see the same forcing.
//!
//! Forcing files are CSV with a header row, e.g.
//!
//! ```csv
//! day,T_atm_pole,T_atm_eq
//! 1,-12.5,26.1
//! 2,-12.7,26.0
//! ```
//!
//! Only the `T_atm_pole` and `T_atm_eq` columns are read; any other columns are ignored.

use crate::errors::{BoxModelError, BoxModelResult};
use crate::timeseries::{day_of_year, DayIndex, FloatValue, DAYS_PER_YEAR};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Header of the polar air temperature column
pub const POLAR_COLUMN: &str = "T_atm_pole";
/// Header of the equatorial air temperature column
pub const EQUATORIAL_COLUMN: &str = "T_atm_eq";

/// Source of the atmospheric boundary temperatures for a given simulation day.
pub trait ForcingProvider {
    /// Air temperature over the polar boxes (°C)
    fn get_polar_forcing(&self, day: DayIndex) -> FloatValue;
    /// Air temperature over the equatorial box (°C)
    fn get_equatorial_forcing(&self, day: DayIndex) -> FloatValue;
}

/// Serialized form of [`PeriodicForcing`].
///
/// Deserialization goes through [`PeriodicForcing::from_values`] so that short or ragged
/// series are rejected rather than indexed out of bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForcing {
    pub polar: Vec<FloatValue>,
    pub equatorial: Vec<FloatValue>,
}

/// A one-year daily forcing series, repeated every 365 days.
///
/// The series is read once and is immutable afterwards.
/// Entries past the 365th are retained but never indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForcing", into = "RawForcing")]
pub struct PeriodicForcing {
    polar: Array1<FloatValue>,
    equatorial: Array1<FloatValue>,
}

impl PeriodicForcing {
    /// Build a forcing series from daily polar and equatorial air temperatures.
    ///
    /// Fails if the columns differ in length or cover less than a full year.
    pub fn from_values(polar: Vec<FloatValue>, equatorial: Vec<FloatValue>) -> BoxModelResult<Self> {
        if polar.len() != equatorial.len() {
            return Err(BoxModelError::ForcingLengthMismatch {
                polar: polar.len(),
                equatorial: equatorial.len(),
            });
        }
        if polar.len() < DAYS_PER_YEAR {
            return Err(BoxModelError::ForcingTooShort {
                required: DAYS_PER_YEAR,
                found: polar.len(),
            });
        }

        Ok(Self {
            polar: Array1::from_vec(polar),
            equatorial: Array1::from_vec(equatorial),
        })
    }

    /// Forcing that holds both air temperatures fixed all year.
    pub fn constant(polar: FloatValue, equatorial: FloatValue) -> Self {
        Self {
            polar: Array1::from_elem(DAYS_PER_YEAR, polar),
            equatorial: Array1::from_elem(DAYS_PER_YEAR, equatorial),
        }
    }

    /// Load a forcing series from a CSV file.
    pub fn from_csv_path(path: &Path) -> BoxModelResult<Self> {
        let file = File::open(path)?;
        let forcing = Self::from_csv_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} days of forcing from {}",
            forcing.len(),
            path.display()
        );
        Ok(forcing)
    }

    /// Read a forcing series from any CSV source with a header row.
    ///
    /// Column names are matched case-insensitively.
    pub fn from_csv_reader<R: Read>(reader: R) -> BoxModelResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let polar_idx = resolve_column(&headers, POLAR_COLUMN)?;
        let equatorial_idx = resolve_column(&headers, EQUATORIAL_COLUMN)?;

        let mut polar = Vec::new();
        let mut equatorial = Vec::new();

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Header is row 1
            let row = row_idx + 2;
            polar.push(parse_value(&record, polar_idx, POLAR_COLUMN, row)?);
            equatorial.push(parse_value(&record, equatorial_idx, EQUATORIAL_COLUMN, row)?);
        }

        Self::from_values(polar, equatorial)
    }

    /// Number of daily entries in the series
    pub fn len(&self) -> usize {
        self.polar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polar.is_empty()
    }
}

impl TryFrom<RawForcing> for PeriodicForcing {
    type Error = BoxModelError;

    fn try_from(raw: RawForcing) -> BoxModelResult<Self> {
        Self::from_values(raw.polar, raw.equatorial)
    }
}

impl From<PeriodicForcing> for RawForcing {
    fn from(forcing: PeriodicForcing) -> Self {
        Self {
            polar: forcing.polar.to_vec(),
            equatorial: forcing.equatorial.to_vec(),
        }
    }
}

impl ForcingProvider for PeriodicForcing {
    fn get_polar_forcing(&self, day: DayIndex) -> FloatValue {
        self.polar[day_of_year(day)]
    }

    fn get_equatorial_forcing(&self, day: DayIndex) -> FloatValue {
        self.equatorial[day_of_year(day)]
    }
}

fn resolve_column(headers: &csv::StringRecord, name: &str) -> BoxModelResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| BoxModelError::MissingColumn(name.to_string()))
}

fn parse_value(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> BoxModelResult<FloatValue> {
    let raw = record.get(idx).unwrap_or_default();
    raw.parse::<FloatValue>()
        .map_err(|_| BoxModelError::InvalidValue {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
