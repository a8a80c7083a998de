//! Day slicing logic.
//!
//! This module splits logged work intervals at midnight boundaries, clipped
//! to the reporting period. Each slice lies within exactly one calendar day
//! and carries the rest/holiday flags of the interval it came from, so later
//! stages never need a back-reference to the source record.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Period, WorkInterval};

/// The portion of one work interval confined within a single calendar day.
///
/// Slice lengths are computed in whole minutes (truncated, not rounded) so
/// that second-level arithmetic drift cannot accumulate across many slices.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::slice_by_day;
/// use compensation_engine::models::{Period, WorkInterval};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let period = Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let interval = WorkInterval {
///     start_time: NaiveDateTime::parse_from_str("2026-01-12 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-13 03:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_rest_day: false,
///     is_holiday: false,
///     project_id: None,
/// };
///
/// let slices = slice_by_day(&[interval], period);
/// assert_eq!(slices.len(), 2);
/// assert_eq!(slices[0].minutes, 240); // 20:00 - 24:00 on the 12th
/// assert_eq!(slices[1].minutes, 180); // 00:00 - 03:00 on the 13th
/// assert_eq!(slices[0].day_key(), "2026-01-12");
/// assert_eq!(slices[1].day_key(), "2026-01-13");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlice {
    /// The slice start (within `day`).
    pub start: NaiveDateTime,
    /// The slice end, half-open; at most the following midnight.
    pub end: NaiveDateTime,
    /// Whole minutes between `start` and `end`.
    pub minutes: i64,
    /// Rest-day flag copied from the source interval.
    pub is_rest_day: bool,
    /// Holiday flag copied from the source interval.
    pub is_holiday: bool,
    /// The calendar day this slice belongs to.
    pub day: NaiveDate,
}

impl DaySlice {
    /// Slice length in hours, derived from the minute count.
    pub fn hours(&self) -> Decimal {
        Decimal::new(self.minutes, 0) / Decimal::new(60, 0)
    }

    /// Stable key identifying the calendar day (`yyyy-MM-dd`).
    pub fn day_key(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}

/// Splits intervals into single-day slices, clipped to the period.
///
/// For each interval the start and end are clamped to `[period.start,
/// period.end)`; anything left with no positive duration contributes
/// nothing. The cursor then walks forward one midnight at a time, emitting
/// one slice per calendar day touched. Day boundaries are strictly after
/// the cursor within a valid clamp, so the loop always makes progress and
/// zero-length slices are never emitted.
///
/// The union of an interval's slices exactly reconstructs its clamped span:
/// no gaps, no overlaps, each slice within exactly one day.
pub fn slice_by_day(intervals: &[WorkInterval], period: Period) -> Vec<DaySlice> {
    let mut out = Vec::new();

    for interval in intervals {
        let clamped_start = interval.start_time.max(period.start);
        let clamped_end = interval.end_time.min(period.end);
        if clamped_end <= clamped_start {
            continue;
        }

        let mut cursor = clamped_start;
        while cursor < clamped_end {
            let day = cursor.date();
            let next_midnight = next_day_start(day);
            let slice_end = next_midnight.min(clamped_end);

            // Minute-truncated length, never negative.
            let minutes = (slice_end - cursor).num_minutes().max(0);

            out.push(DaySlice {
                start: cursor,
                end: slice_end,
                minutes,
                is_rest_day: interval.is_rest_day,
                is_holiday: interval.is_holiday,
                day,
            });

            cursor = slice_end;
        }
    }

    out
}

/// Midnight at the start of the day after `day`.
fn next_day_start(day: NaiveDate) -> NaiveDateTime {
    (day + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn january() -> Period {
        Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    fn interval(start: NaiveDateTime, end: NaiveDateTime) -> WorkInterval {
        WorkInterval {
            start_time: start,
            end_time: end,
            is_rest_day: false,
            is_holiday: false,
            project_id: None,
        }
    }

    // ==========================================================================
    // DS-001: single-day interval produces one slice
    // ==========================================================================
    #[test]
    fn test_ds_001_single_day_interval_one_slice() {
        let slices = slice_by_day(
            &[interval(
                make_datetime("2026-01-12", "09:00:00"),
                make_datetime("2026-01-12", "18:00:00"),
            )],
            january(),
        );

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].minutes, 540);
        assert_eq!(slices[0].hours(), dec("9"));
        assert_eq!(slices[0].day_key(), "2026-01-12");
    }

    // ==========================================================================
    // DS-002: overnight interval splits at midnight
    // ==========================================================================
    #[test]
    fn test_ds_002_overnight_interval_splits_at_midnight() {
        let slices = slice_by_day(
            &[interval(
                make_datetime("2026-01-12", "20:00:00"),
                make_datetime("2026-01-13", "03:00:00"),
            )],
            january(),
        );

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start, make_datetime("2026-01-12", "20:00:00"));
        assert_eq!(slices[0].end, make_datetime("2026-01-13", "00:00:00"));
        assert_eq!(slices[0].minutes, 240);
        assert_eq!(slices[1].start, make_datetime("2026-01-13", "00:00:00"));
        assert_eq!(slices[1].end, make_datetime("2026-01-13", "03:00:00"));
        assert_eq!(slices[1].minutes, 180);
    }

    // ==========================================================================
    // DS-003: multi-day interval duplicates flags on every slice
    // ==========================================================================
    #[test]
    fn test_ds_003_flags_copied_to_every_slice() {
        let slices = slice_by_day(
            &[WorkInterval {
                start_time: make_datetime("2026-01-12", "22:00:00"),
                end_time: make_datetime("2026-01-14", "02:00:00"),
                is_rest_day: true,
                is_holiday: true,
                project_id: None,
            }],
            january(),
        );

        assert_eq!(slices.len(), 3);
        for s in &slices {
            assert!(s.is_rest_day);
            assert!(s.is_holiday);
        }
    }

    // ==========================================================================
    // DS-004: clamping to the period start and end
    // ==========================================================================
    #[test]
    fn test_ds_004_clamped_to_period() {
        // Crosses into January from December and out into February.
        let slices = slice_by_day(
            &[
                interval(
                    make_datetime("2025-12-31", "22:00:00"),
                    make_datetime("2026-01-01", "04:00:00"),
                ),
                interval(
                    make_datetime("2026-01-31", "20:00:00"),
                    make_datetime("2026-02-01", "06:00:00"),
                ),
            ],
            january(),
        );

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start, make_datetime("2026-01-01", "00:00:00"));
        assert_eq!(slices[0].minutes, 240);
        assert_eq!(slices[1].end, make_datetime("2026-02-01", "00:00:00"));
        assert_eq!(slices[1].minutes, 240);
    }

    // ==========================================================================
    // DS-005: interval entirely outside the period contributes nothing
    // ==========================================================================
    #[test]
    fn test_ds_005_out_of_period_interval_skipped() {
        let slices = slice_by_day(
            &[interval(
                make_datetime("2026-03-05", "09:00:00"),
                make_datetime("2026-03-05", "17:00:00"),
            )],
            january(),
        );
        assert!(slices.is_empty());
    }

    // ==========================================================================
    // DS-006: zero-length and reversed intervals are skipped
    // ==========================================================================
    #[test]
    fn test_ds_006_degenerate_intervals_skipped() {
        let slices = slice_by_day(
            &[
                interval(
                    make_datetime("2026-01-12", "09:00:00"),
                    make_datetime("2026-01-12", "09:00:00"),
                ),
                interval(
                    make_datetime("2026-01-12", "18:00:00"),
                    make_datetime("2026-01-12", "09:00:00"),
                ),
            ],
            january(),
        );
        assert!(slices.is_empty());
    }

    // ==========================================================================
    // DS-007: slices reconstruct the clamped span with no gaps or overlaps
    // ==========================================================================
    #[test]
    fn test_ds_007_slices_reconstruct_interval() {
        let start = make_datetime("2026-01-10", "13:30:00");
        let end = make_datetime("2026-01-13", "07:45:00");
        let slices = slice_by_day(&[interval(start, end)], january());

        assert_eq!(slices.first().unwrap().start, start);
        assert_eq!(slices.last().unwrap().end, end);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        let total_minutes: i64 = slices.iter().map(|s| s.minutes).sum();
        assert_eq!(total_minutes, (end - start).num_minutes());
    }

    // ==========================================================================
    // DS-008: interval starting exactly at midnight
    // ==========================================================================
    #[test]
    fn test_ds_008_midnight_start_single_slice() {
        let slices = slice_by_day(
            &[interval(
                make_datetime("2026-01-12", "00:00:00"),
                make_datetime("2026-01-12", "08:00:00"),
            )],
            january(),
        );

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].minutes, 480);
        assert_eq!(slices[0].day_key(), "2026-01-12");
    }

    // ==========================================================================
    // DS-009: sub-hour minutes are truncated, not rounded
    // ==========================================================================
    #[test]
    fn test_ds_009_minute_truncation() {
        let start = make_datetime("2026-01-12", "09:00:30");
        let end = make_datetime("2026-01-12", "09:10:15");
        let slices = slice_by_day(&[interval(start, end)], january());

        // 9m45s truncates to 9 whole minutes.
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].minutes, 9);
    }
}
