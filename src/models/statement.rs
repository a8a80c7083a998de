//! Statement models for the compensation engine.
//!
//! This module contains the output side of a computation: the four pay
//! buckets, the [`BucketHours`] accumulator, the per-policy
//! [`PayrollStatement`], and the cross-project [`MonthlyEarningsSummary`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Period;

/// The four mutually exclusive pay buckets.
///
/// # Example
///
/// ```
/// use compensation_engine::models::PayBucket;
///
/// let bucket = PayBucket::HolidayOvertime;
/// assert_eq!(format!("{:?}", bucket), "HolidayOvertime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBucket {
    /// Regular hours paid at the base rate.
    Regular,
    /// Overtime on a workday, past the regular-hours budget.
    WorkdayOvertime,
    /// Overtime on a rest day.
    RestDayOvertime,
    /// Overtime on a statutory holiday.
    HolidayOvertime,
}

/// Hour accumulators for the four pay buckets.
///
/// Each field is monotonically increased via [`BucketHours::add`], never
/// decreased. Negative contributions are clamped to zero before
/// accumulation as a defensive floor.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{BucketHours, PayBucket};
/// use rust_decimal::Decimal;
///
/// let mut hours = BucketHours::default();
/// hours.add(PayBucket::Regular, Decimal::new(8, 0));
/// hours.add(PayBucket::WorkdayOvertime, Decimal::new(1, 0));
/// assert_eq!(hours.total_hours(), Decimal::new(9, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketHours {
    /// Regular hours.
    pub regular: Decimal,
    /// Workday overtime hours.
    pub workday_ot: Decimal,
    /// Rest-day overtime hours.
    pub rest_day_ot: Decimal,
    /// Holiday overtime hours.
    pub holiday_ot: Decimal,
}

impl BucketHours {
    /// Adds hours to a bucket, clamping negative contributions to zero.
    pub fn add(&mut self, bucket: PayBucket, hours: Decimal) {
        let h = hours.max(Decimal::ZERO);
        match bucket {
            PayBucket::Regular => self.regular += h,
            PayBucket::WorkdayOvertime => self.workday_ot += h,
            PayBucket::RestDayOvertime => self.rest_day_ot += h,
            PayBucket::HolidayOvertime => self.holiday_ot += h,
        }
    }

    /// Sum of all four buckets.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.workday_ot + self.rest_day_ot + self.holiday_ot
    }
}

/// The result of computing one policy over one log set and one period.
///
/// Amounts are exact Decimal products of bucket hours, the base rate, and
/// the per-bucket multiplier; rounding happens only when statements are
/// summed across projects by the monthly aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// The half-open reporting period the statement covers.
    pub period: Period,
    /// Bucketed hours.
    pub hours: BucketHours,
    /// Amount for regular hours (multiplier 1.0).
    pub amount_regular: Decimal,
    /// Amount for workday overtime.
    pub amount_workday_ot: Decimal,
    /// Amount for rest-day overtime.
    pub amount_rest_day_ot: Decimal,
    /// Amount for holiday overtime.
    pub amount_holiday_ot: Decimal,
    /// Sum of the four amounts.
    pub amount_total: Decimal,
}

/// Aggregated monthly result across projects.
///
/// Top-level hours and amounts are the rollup over every project group that
/// resolved a policy; `by_project` keeps the per-group statements (`None`
/// key = unassigned logs computed under the default policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyEarningsSummary {
    /// The month window the summary covers.
    pub period: Period,
    /// Bucketed hours summed across all groups.
    pub hours: BucketHours,
    /// Regular amount, rounded per group before accumulation.
    pub amount_regular: Decimal,
    /// Workday overtime amount, rounded per group before accumulation.
    pub amount_workday_ot: Decimal,
    /// Rest-day overtime amount, rounded per group before accumulation.
    pub amount_rest_day_ot: Decimal,
    /// Holiday overtime amount, rounded per group before accumulation.
    pub amount_holiday_ot: Decimal,
    /// Project-level statements (key = project id, `None` for unassigned).
    pub by_project: HashMap<Option<Uuid>, PayrollStatement>,
    /// True when unassigned logs were skipped because no default payroll
    /// policy was supplied.
    pub has_unassigned_but_no_default: bool,
}

impl MonthlyEarningsSummary {
    /// Sum of the four rolled-up amounts.
    pub fn amount_total(&self) -> Decimal {
        self.amount_regular + self.amount_workday_ot + self.amount_rest_day_ot
            + self.amount_holiday_ot
    }
}
