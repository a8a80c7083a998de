//! Comprehensive-hours classification.
//!
//! Monthly-quota scheme: the regular-hours budget is a single shared pool of
//! `workday_count * hours_per_workday`, consumed by all slices of the period
//! in chronological order. Holiday-flagged slices go straight to holiday
//! overtime; rest-day flags are deliberately not special-cased in this mode
//! (any non-holiday slice draws from the shared pool). That asymmetry with
//! the standard-hours scheme matches observed payroll behaviour and is
//! covered by tests; changing it would silently change payroll outputs.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::models::{BucketHours, PayBucket};

use super::day_slicer::DaySlice;

/// Classifies slices under the comprehensive-hours scheme.
///
/// The workday count is the number of distinct calendar days that contain
/// at least one slice flagged neither holiday nor rest-day. Only days with
/// logged slices count; this is a quota-by-presence policy, not a
/// calendar-month lookup.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::{classify_comprehensive_hours, slice_by_day};
/// use compensation_engine::models::{Period, WorkInterval};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let period = Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let interval = WorkInterval {
///     start_time: NaiveDateTime::parse_from_str("2026-01-12 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-12 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_rest_day: false,
///     is_holiday: false,
///     project_id: None,
/// };
///
/// // One logged workday: quota = 1 * 8h, so 10h split 8 regular + 2 OT.
/// let slices = slice_by_day(&[interval], period);
/// let hours = classify_comprehensive_hours(&slices, Decimal::new(8, 0));
/// assert_eq!(hours.regular, Decimal::new(8, 0));
/// assert_eq!(hours.workday_ot, Decimal::new(2, 0));
/// ```
pub fn classify_comprehensive_hours(
    slices: &[DaySlice],
    hours_per_workday: Decimal,
) -> BucketHours {
    let mut buckets = BucketHours::default();

    // Quota from days actually containing non-holiday, non-rest slices.
    let workday_count = slices
        .iter()
        .filter(|s| !s.is_holiday && !s.is_rest_day)
        .map(|s| s.day)
        .collect::<BTreeSet<_>>()
        .len();

    let mut remaining_regular =
        Decimal::from(workday_count as i64) * hours_per_workday.max(Decimal::ZERO);

    let mut ordered: Vec<&DaySlice> = slices.iter().collect();
    ordered.sort_by_key(|s| s.start);

    for slice in ordered {
        let h = slice.hours();
        if slice.is_holiday {
            buckets.add(PayBucket::HolidayOvertime, h);
            continue;
        }

        // Non-holiday slices (rest-day flagged or not) consume the pool.
        let reg = remaining_regular.min(h);
        let ot = (h - reg).max(Decimal::ZERO);
        if reg > Decimal::ZERO {
            buckets.add(PayBucket::Regular, reg);
        }
        if ot > Decimal::ZERO {
            buckets.add(PayBucket::WorkdayOvertime, ot);
        }
        remaining_regular -= reg;
    }

    buckets
}
