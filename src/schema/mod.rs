//! Schema module - Configuration and reporting types for phrase evolution runs.

mod alphabet;
mod config;
mod evolution;

pub use alphabet::*;
pub use config::*;
pub use evolution::*;
