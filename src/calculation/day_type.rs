//! Day type resolution from explicit slice flags.
//!
//! Given the slices belonging to one calendar day, decides whether the day
//! as a whole counts as a holiday, a rest day, or a workday. Flags on the
//! record always win; holiday beats rest-day when both appear on the same
//! day.

use serde::{Deserialize, Serialize};

use super::day_slicer::DaySlice;

/// The resolved type of a calendar day.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::DayType;
///
/// let day_type = DayType::RestDay;
/// assert_eq!(day_type.to_string(), "RestDay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Statutory holiday: all hours are holiday overtime.
    Holiday,
    /// Rest day: all hours are rest-day overtime.
    RestDay,
    /// Ordinary workday: regular hours up to the daily threshold.
    Workday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Holiday => write!(f, "Holiday"),
            DayType::RestDay => write!(f, "RestDay"),
            DayType::Workday => write!(f, "Workday"),
        }
    }
}

/// Resolves the type of one calendar day from its slices.
///
/// Priority order:
/// 1. any slice flagged holiday makes the whole day a [`DayType::Holiday`],
///    even if other slices on the same day are flagged rest-day;
/// 2. otherwise any rest-day flag makes it a [`DayType::RestDay`];
/// 3. otherwise it is a [`DayType::Workday`].
///
/// This is a day-level decision: standard-hours classification applies the
/// resolved type uniformly to every slice of the day.
pub fn resolve_day_type(day_slices: &[DaySlice]) -> DayType {
    if day_slices.iter().any(|s| s.is_holiday) {
        DayType::Holiday
    } else if day_slices.iter().any(|s| s.is_rest_day) {
        DayType::RestDay
    } else {
        DayType::Workday
    }
}
