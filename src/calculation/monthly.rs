//! Monthly cross-project aggregation.
//!
//! Groups a month's logs by owning project, computes a statement per group
//! under that project's policy (or a supplied default policy for unassigned
//! logs), and rolls the per-group hours and amounts up into one summary.
//! Each group's amounts are rounded half-to-even to two decimal places
//! before accumulation so cross-project sums cannot compound sub-cent
//! residue.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{
    BucketHours, MonthlyEarningsSummary, PayrollStatement, Period, Project, WorkInterval,
};

use super::engine::CompensationEngine;
use super::rate::round_money;

/// Computes a month-level earnings rollup across projects.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::MonthlyEarningsCalculator;
/// use compensation_engine::config::PayrollConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calc = MonthlyEarningsCalculator::new();
/// let summary = calc.summarize(
///     &[],
///     &[],
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     Some(&PayrollConfig::standard(Decimal::new(8, 0))),
/// );
/// assert_eq!(summary.hours.total_hours(), Decimal::ZERO);
/// assert!(!summary.has_unassigned_but_no_default);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyEarningsCalculator {
    engine: CompensationEngine,
}

impl MonthlyEarningsCalculator {
    /// Creates a calculator wrapping a fresh engine.
    pub fn new() -> Self {
        Self {
            engine: CompensationEngine::new(),
        }
    }

    /// Summarizes one calendar month across projects.
    ///
    /// The month window is derived from `month_anchor`. Logs are grouped by
    /// `project_id` (`None` = unassigned); each group with a resolvable
    /// policy gets a statement in `by_project`:
    ///
    /// - assigned groups use their project's own policy; a group whose
    ///   project id matches none of `projects` is skipped (broken
    ///   assignments are a store-level concern, not an error here);
    /// - the unassigned group uses `default_payroll`; when that is absent
    ///   the group is skipped and `has_unassigned_but_no_default` is set
    ///   for the caller to surface.
    ///
    /// A group whose logs all clamp to nothing is absent from the map, not
    /// an error. Empty input yields an all-zero summary with the flag
    /// false.
    pub fn summarize(
        &self,
        logs: &[WorkInterval],
        projects: &[Project],
        month_anchor: NaiveDate,
        default_payroll: Option<&PayrollConfig>,
    ) -> MonthlyEarningsSummary {
        let period = Period::month_of(month_anchor);

        let policies: HashMap<Uuid, &PayrollConfig> =
            projects.iter().map(|p| (p.id, &p.payroll)).collect();

        let mut grouped: HashMap<Option<Uuid>, Vec<WorkInterval>> = HashMap::new();
        for log in logs {
            grouped.entry(log.project_id).or_default().push(log.clone());
        }

        let mut by_project: HashMap<Option<Uuid>, PayrollStatement> = HashMap::new();
        let mut acc_hours = BucketHours::default();
        let mut amount_regular = Decimal::ZERO;
        let mut amount_workday_ot = Decimal::ZERO;
        let mut amount_rest_day_ot = Decimal::ZERO;
        let mut amount_holiday_ot = Decimal::ZERO;
        let mut has_unassigned_but_no_default = false;

        for (key, group) in grouped {
            let cfg = match key {
                Some(project_id) => match policies.get(&project_id) {
                    Some(cfg) => *cfg,
                    None => {
                        warn!(%project_id, "skipping logs of unknown project");
                        continue;
                    }
                },
                None => match default_payroll {
                    Some(cfg) => cfg,
                    None => {
                        has_unassigned_but_no_default = true;
                        continue;
                    }
                },
            };

            // A group whose logs all clamp away is simply absent from the
            // per-project map, not an error and not a zero statement.
            let has_in_period_work = group
                .iter()
                .any(|l| l.end_time.min(period.end) > l.start_time.max(period.start));
            if !has_in_period_work {
                continue;
            }

            let stmt = self.engine.compute_statement(&group, period, cfg);
            debug!(
                project_id = ?key,
                total_hours = %stmt.hours.total_hours(),
                "aggregated project group"
            );

            acc_hours.regular += stmt.hours.regular;
            acc_hours.workday_ot += stmt.hours.workday_ot;
            acc_hours.rest_day_ot += stmt.hours.rest_day_ot;
            acc_hours.holiday_ot += stmt.hours.holiday_ot;

            // Round per group before summing so floating residue from one
            // project cannot leak into another's total.
            amount_regular += round_money(stmt.amount_regular);
            amount_workday_ot += round_money(stmt.amount_workday_ot);
            amount_rest_day_ot += round_money(stmt.amount_rest_day_ot);
            amount_holiday_ot += round_money(stmt.amount_holiday_ot);

            by_project.insert(key, stmt);
        }

        MonthlyEarningsSummary {
            period,
            hours: acc_hours,
            amount_regular,
            amount_workday_ot,
            amount_rest_day_ot,
            amount_holiday_ot,
            by_project,
            has_unassigned_but_no_default,
        }
    }
}
