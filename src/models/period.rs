//! Reporting period model.
//!
//! This module contains the [`Period`] type: the half-open datetime window
//! a statement is computed over, typically one calendar month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open reporting interval `[start, end)`.
///
/// # Example
///
/// ```
/// use compensation_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let january = Period::month_of(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(january.start.date(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(january.end.date(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The start of the period (inclusive).
    pub start: NaiveDateTime,
    /// The end of the period (exclusive).
    pub end: NaiveDateTime,
}

impl Period {
    /// Creates a period from its bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The calendar month enclosing `anchor`, as `[first-of-month 00:00,
    /// first-of-next-month 00:00)`.
    pub fn month_of(anchor: NaiveDate) -> Self {
        let start = anchor
            .with_day(1)
            .unwrap_or(anchor)
            .and_hms_opt(0, 0, 0)
            .unwrap_or_else(|| anchor.and_hms_opt(0, 0, 0).unwrap());
        let (next_year, next_month) = if anchor.month() == 12 {
            (anchor.year() + 1, 1)
        } else {
            (anchor.year(), anchor.month() + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .unwrap_or(anchor)
            .and_hms_opt(0, 0, 0)
            .unwrap_or(start);
        Self { start, end }
    }

    /// Whether a timestamp falls inside the half-open window.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts < self.end
    }

    /// Total period length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }
}
