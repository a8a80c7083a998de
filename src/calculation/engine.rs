//! The compensation engine facade.
//!
//! Orchestrates slicing, classification, and rate conversion for one policy,
//! one log set, and one period. Stateless: every call is a pure function of
//! its arguments, safe to run concurrently with other computations.

use tracing::debug;

use crate::config::{PayrollConfig, WorkMode};
use crate::models::{PayrollStatement, Period, WorkInterval};

use super::comprehensive_hours::classify_comprehensive_hours;
use super::day_slicer::slice_by_day;
use super::rate::convert;
use super::standard_hours::classify_standard_hours;

/// Classifies work logs and computes pay buckets for one policy and period.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::CompensationEngine;
/// use compensation_engine::config::PayrollConfig;
/// use compensation_engine::models::{Period, WorkInterval};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let engine = CompensationEngine::new();
/// let period = Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let logs = vec![WorkInterval {
///     start_time: NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-12 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_rest_day: false,
///     is_holiday: false,
///     project_id: None,
/// }];
///
/// let stmt = engine.compute_statement(&logs, period, &PayrollConfig::standard(Decimal::new(8, 0)));
/// assert_eq!(stmt.hours.regular, Decimal::new(8, 0));
/// assert_eq!(stmt.amount_total, Decimal::new(285, 0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensationEngine;

impl CompensationEngine {
    /// Creates an engine. The engine holds no state; this exists for
    /// call-site symmetry with the aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Computes a payroll statement for one log set, period, and policy.
    ///
    /// Slices the logs at midnight boundaries (clipped to `period`),
    /// classifies them under `cfg.mode`, and converts bucketed hours into
    /// exact currency amounts. Never fails: degenerate intervals simply
    /// contribute nothing.
    pub fn compute_statement(
        &self,
        logs: &[WorkInterval],
        period: Period,
        cfg: &PayrollConfig,
    ) -> PayrollStatement {
        let slices = slice_by_day(logs, period);
        debug!(
            log_count = logs.len(),
            slice_count = slices.len(),
            mode = ?cfg.mode,
            "computing payroll statement"
        );

        let hours = match cfg.mode {
            WorkMode::StandardHours => {
                classify_standard_hours(&slices, cfg.daily_regular_hours)
            }
            WorkMode::ComprehensiveHours => {
                classify_comprehensive_hours(&slices, cfg.hours_per_workday)
            }
        };

        let amounts = convert(&hours, &cfg.rate_table);

        PayrollStatement {
            period,
            hours,
            amount_regular: amounts.regular,
            amount_workday_ot: amounts.workday_ot,
            amount_rest_day_ot: amounts.rest_day_ot,
            amount_holiday_ot: amounts.holiday_ot,
            amount_total: amounts.total(),
        }
    }
}
