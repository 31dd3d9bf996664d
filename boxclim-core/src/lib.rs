pub mod errors;
pub mod forcing;
pub mod ivp;
pub mod state;
pub mod timeseries;
