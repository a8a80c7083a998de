//! Payroll policy configuration for the compensation engine.
//!
//! This module contains the strongly-typed policy structures consumed by the
//! engine, plus a loader for reading a policy from a JSON file as persisted
//! by the settings layer.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimeMultipliers, PayrollConfig, RateTable, WorkMode};
