//! Calculation logic for the compensation engine.
//!
//! This module contains the whole classification pipeline: slicing logged
//! intervals at midnight boundaries, resolving per-day types from explicit
//! flags, the two bucket classifiers (standard hours and comprehensive
//! hours), rate conversion into currency amounts, the engine facade, and
//! the monthly cross-project aggregator.

mod comprehensive_hours;
mod day_slicer;
mod day_type;
mod engine;
mod monthly;
mod rate;
mod standard_hours;

pub use comprehensive_hours::classify_comprehensive_hours;
pub use day_slicer::{DaySlice, slice_by_day};
pub use day_type::{DayType, resolve_day_type};
pub use engine::CompensationEngine;
pub use monthly::MonthlyEarningsCalculator;
pub use rate::{convert_to_amounts, round_money};
pub use standard_hours::classify_standard_hours;
