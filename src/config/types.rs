//! Policy configuration types.
//!
//! These types describe a payroll policy: the work scheme (per-day threshold
//! vs. monthly quota), the thresholds for each scheme, and the rate table
//! used to convert bucketed hours into currency amounts. They are
//! deserialized from JSON documents written by the settings layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// High-level work schemes.
///
/// Selects which classification algorithm the engine runs.
///
/// # Example
///
/// ```
/// use compensation_engine::config::WorkMode;
///
/// let mode: WorkMode = serde_json::from_str("\"standard_hours\"").unwrap();
/// assert_eq!(mode, WorkMode::StandardHours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    /// Overtime after a fixed number of hours per day; rest days and
    /// holidays are classified entirely as overtime.
    StandardHours,
    /// Overtime after a monthly quota (hours-per-workday times the number
    /// of logged workdays), consumed time-ordered across the whole month.
    ComprehensiveHours,
}

/// Multipliers for overtime scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for workday overtime (e.g., 1.5).
    pub workday: Decimal,
    /// Multiplier for rest-day overtime (e.g., 2.0).
    pub rest_day: Decimal,
    /// Multiplier for holiday overtime (e.g., 3.0).
    pub holiday: Decimal,
}

/// Base rate and multiplier table.
///
/// Regular hours are paid at `base_per_hour`; each overtime bucket is paid
/// at `base_per_hour` times its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The base hourly rate.
    pub base_per_hour: Decimal,
    /// Overtime multipliers per bucket.
    pub multipliers: OvertimeMultipliers,
}

impl RateTable {
    /// The demo rate table: base 30/h, multipliers 1.5 / 2.0 / 3.0.
    ///
    /// # Example
    ///
    /// ```
    /// use compensation_engine::config::RateTable;
    /// use rust_decimal::Decimal;
    ///
    /// let rt = RateTable::demo();
    /// assert_eq!(rt.base_per_hour, Decimal::new(30, 0));
    /// assert_eq!(rt.multipliers.holiday, Decimal::new(30, 1));
    /// ```
    pub fn demo() -> Self {
        Self {
            base_per_hour: Decimal::new(30, 0),
            multipliers: OvertimeMultipliers {
                workday: Decimal::new(15, 1),
                rest_day: Decimal::new(20, 1),
                holiday: Decimal::new(30, 1),
            },
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::demo()
    }
}

/// Payroll policy knobs.
///
/// Attached to a project, or supplied as the fallback default policy for
/// unassigned logs. Fields omitted from a policy document take the same
/// defaults the original settings screen seeds.
///
/// # Example
///
/// ```
/// use compensation_engine::config::{PayrollConfig, WorkMode};
/// use rust_decimal::Decimal;
///
/// let json = r#"{ "mode": "standard_hours" }"#;
/// let cfg: PayrollConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(cfg.mode, WorkMode::StandardHours);
/// assert_eq!(cfg.daily_regular_hours, Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The work scheme to classify under.
    pub mode: WorkMode,
    /// Daily regular-hours threshold, used only in standard-hours mode.
    #[serde(default = "default_eight_hours")]
    pub daily_regular_hours: Decimal,
    /// Per-workday quota unit, used only in comprehensive-hours mode.
    #[serde(default = "default_eight_hours")]
    pub hours_per_workday: Decimal,
    /// Rate table for converting bucketed hours into amounts.
    #[serde(default)]
    pub rate_table: RateTable,
}

impl PayrollConfig {
    /// Creates a standard-hours policy with the given daily threshold and
    /// the demo rate table.
    pub fn standard(daily_regular_hours: Decimal) -> Self {
        Self {
            mode: WorkMode::StandardHours,
            daily_regular_hours,
            hours_per_workday: default_eight_hours(),
            rate_table: RateTable::demo(),
        }
    }

    /// Creates a comprehensive-hours policy with the given per-workday
    /// quota unit and the demo rate table.
    pub fn comprehensive(hours_per_workday: Decimal) -> Self {
        Self {
            mode: WorkMode::ComprehensiveHours,
            daily_regular_hours: default_eight_hours(),
            hours_per_workday,
            rate_table: RateTable::demo(),
        }
    }
}

fn default_eight_hours() -> Decimal {
    Decimal::new(8, 0)
}
