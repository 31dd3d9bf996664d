//! Physics of the three-box ocean/atmosphere/sea-ice model.
//!
//! - [`eos`]: seawater equation of state and the linearised density difference
//! - [`closures`]: overturning, vertical mixing, ice growth/melt and sea-level dilution
//! - [`model`]: assembly of the closures into the model equations
//! - [`parameters`]: constants of each closure, grouped so that coefficients sharing a
//!   conventional symbol (e.g. `alpha`, `beta`) cannot leak between closures

pub mod closures;
pub mod eos;
pub mod model;
pub mod parameters;
