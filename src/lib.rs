//! Three-box ocean/atmosphere/sea-ice climate model.
//!
//! The physics lives in [`boxclim_components`]; state, forcing and time stepping in
//! [`boxclim_core`]. [`config`] describes a complete run and is what the `boxclim` binary reads.

pub use boxclim_components;
pub use boxclim_core;

pub mod config;
