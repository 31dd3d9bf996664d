//! Physical closures of the box model.
//!
//! Each closure is a pure function of the current box values and its own parameter struct.
//! Together they provide the feedback terms of the model equations.

mod ice;
mod mixing;
mod overturning;
mod sea_level;

pub use ice::{ice_step, IceStep};
pub use mixing::vertical_mixing_rate;
pub use overturning::{overturning_flux, OverturningFlux};
pub use sea_level::sea_level_dilution;
