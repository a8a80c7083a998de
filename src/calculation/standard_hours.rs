//! Standard-hours classification.
//!
//! Per-day threshold scheme: each workday carries its own regular-hours
//! budget, consumed by that day's slices in chronological order; anything
//! past the threshold becomes workday overtime. Rest days and holidays are
//! classified entirely as their overtime bucket.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{BucketHours, PayBucket};

use super::day_slicer::DaySlice;
use super::day_type::{DayType, resolve_day_type};

/// Classifies slices under the standard-hours scheme.
///
/// Slices are grouped by calendar day; each day's type is resolved from
/// explicit flags ([`resolve_day_type`]) and every slice of the day is
/// classified uniformly by that type:
///
/// - Holiday: all hours to holiday overtime.
/// - Rest day: all hours to rest-day overtime.
/// - Workday: a running budget of `daily_regular_hours` is consumed in
///   slice-start order; for each slice, `reg = min(budget, h)` goes to
///   regular and the remainder to workday overtime.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::{classify_standard_hours, slice_by_day};
/// use compensation_engine::models::{Period, WorkInterval};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let period = Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let interval = WorkInterval {
///     start_time: NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-12 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_rest_day: false,
///     is_holiday: false,
///     project_id: None,
/// };
///
/// let slices = slice_by_day(&[interval], period);
/// let hours = classify_standard_hours(&slices, Decimal::new(8, 0));
/// assert_eq!(hours.regular, Decimal::new(8, 0));
/// assert_eq!(hours.workday_ot, Decimal::new(1, 0));
/// ```
pub fn classify_standard_hours(slices: &[DaySlice], daily_regular_hours: Decimal) -> BucketHours {
    let mut buckets = BucketHours::default();

    let mut by_day: BTreeMap<String, Vec<DaySlice>> = BTreeMap::new();
    for slice in slices {
        by_day.entry(slice.day_key()).or_default().push(slice.clone());
    }

    for day_slices in by_day.values_mut() {
        let day_type = resolve_day_type(day_slices);

        let mut remaining_regular = match day_type {
            DayType::Holiday | DayType::RestDay => Decimal::ZERO,
            DayType::Workday => daily_regular_hours.max(Decimal::ZERO),
        };

        day_slices.sort_by_key(|s| s.start);
        for slice in day_slices.iter() {
            let h = slice.hours();
            match day_type {
                DayType::Holiday => buckets.add(PayBucket::HolidayOvertime, h),
                DayType::RestDay => buckets.add(PayBucket::RestDayOvertime, h),
                DayType::Workday => {
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
            }
        }
    }

    buckets
}
