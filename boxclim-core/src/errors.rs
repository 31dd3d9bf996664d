use crate::timeseries::{DayIndex, FloatValue};
use thiserror::Error;

/// Error type for the box model.
#[derive(Error, Debug)]
pub enum BoxModelError {
    #[error("Water column frozen solid on day {day}: ice thickness {ice_thickness} m leaves {water_depth} m of liquid water")]
    FrozenSolid {
        day: DayIndex,
        ice_thickness: FloatValue,
        water_depth: FloatValue,
    },
    #[error("Forcing series must cover a full year. Expected at least {required} entries, got {found}")]
    ForcingTooShort { required: usize, found: usize },
    #[error("Forcing columns differ in length: {polar} polar entries, {equatorial} equatorial entries")]
    ForcingLengthMismatch { polar: usize, equatorial: usize },
    #[error("Column '{0}' not found in forcing data")]
    MissingColumn(String),
    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("State became non-finite on day {day}")]
    NonFiniteState { day: DayIndex },
    #[error("Salinity became negative on day {day}: {salinity} psu")]
    NegativeSalinity { day: DayIndex, salinity: FloatValue },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Convenience type for `Result<T, BoxModelError>`.
pub type BoxModelResult<T> = Result<T, BoxModelError>;
