//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct representing one logged
//! stretch of work. Intervals may span midnight and carry explicit rest-day
//! and holiday flags set per record (not derived from a calendar authority).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single logged span of work.
///
/// The engine consumes intervals read-only: it clamps them to the reporting
/// period and skips anything with no in-period duration, but never mutates
/// or rejects a record outright.
///
/// # Example
///
/// ```
/// use compensation_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = WorkInterval {
///     start_time: NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-12 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_rest_day: false,
///     is_holiday: false,
///     project_id: None,
/// };
/// assert_eq!(interval.duration_minutes(), 540);
/// assert!(!interval.is_overnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The start of the interval.
    pub start_time: NaiveDateTime,
    /// The end of the interval.
    pub end_time: NaiveDateTime,
    /// Whether the record was explicitly flagged as rest-day work.
    #[serde(default)]
    pub is_rest_day: bool,
    /// Whether the record was explicitly flagged as statutory-holiday work.
    /// When both flags are set, holiday takes precedence.
    #[serde(default)]
    pub is_holiday: bool,
    /// The owning project, or `None` for unassigned logs.
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

impl WorkInterval {
    /// Duration in whole minutes, clamped at zero for reversed endpoints.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes().max(0)
    }

    /// Whether the interval crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.start_time.date() != self.end_time.date()
    }

    /// Whether this interval overlaps another (half-open comparison).
    pub fn overlaps(&self, other: &WorkInterval) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Returns a copy with `start_time <= end_time`, swapping reversed
    /// endpoints. Flags and project assignment are preserved.
    pub fn normalized(&self) -> WorkInterval {
        if self.end_time < self.start_time {
            WorkInterval {
                start_time: self.end_time,
                end_time: self.start_time,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
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

    /// WI-001: plain nine-hour day
    #[test]
    fn test_wi_001_duration_minutes() {
        let i = interval(
            make_datetime("2026-01-12", "09:00:00"),
            make_datetime("2026-01-12", "18:00:00"),
        );
        assert_eq!(i.duration_minutes(), 540);
    }

    /// WI-002: reversed endpoints clamp to zero
    #[test]
    fn test_wi_002_reversed_endpoints_clamp_to_zero() {
        let i = interval(
            make_datetime("2026-01-12", "18:00:00"),
            make_datetime("2026-01-12", "09:00:00"),
        );
        assert_eq!(i.duration_minutes(), 0);
    }

    /// WI-003: overnight detection
    #[test]
    fn test_wi_003_overnight_detection() {
        let overnight = interval(
            make_datetime("2026-01-12", "20:00:00"),
            make_datetime("2026-01-13", "03:00:00"),
        );
        assert!(overnight.is_overnight());

        let same_day = interval(
            make_datetime("2026-01-12", "09:00:00"),
            make_datetime("2026-01-12", "17:00:00"),
        );
        assert!(!same_day.is_overnight());
    }

    /// WI-004: half-open overlap rules
    #[test]
    fn test_wi_004_overlap_is_half_open() {
        let a = interval(
            make_datetime("2026-01-12", "09:00:00"),
            make_datetime("2026-01-12", "12:00:00"),
        );
        let b = interval(
            make_datetime("2026-01-12", "12:00:00"),
            make_datetime("2026-01-12", "15:00:00"),
        );
        let c = interval(
            make_datetime("2026-01-12", "11:00:00"),
            make_datetime("2026-01-12", "13:00:00"),
        );

        // Touching endpoints do not overlap.
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    /// WI-005: normalized swaps reversed endpoints and keeps flags
    #[test]
    fn test_wi_005_normalized_swaps_endpoints() {
        let reversed = WorkInterval {
            start_time: make_datetime("2026-01-12", "18:00:00"),
            end_time: make_datetime("2026-01-12", "09:00:00"),
            is_rest_day: true,
            is_holiday: false,
            project_id: None,
        };

        let fixed = reversed.normalized();
        assert_eq!(fixed.start_time, make_datetime("2026-01-12", "09:00:00"));
        assert_eq!(fixed.end_time, make_datetime("2026-01-12", "18:00:00"));
        assert!(fixed.is_rest_day);

        // Already-ordered intervals come back unchanged.
        let ordered = fixed.normalized();
        assert_eq!(ordered, fixed);
    }

    #[test]
    fn test_interval_deserialization_defaults() {
        let json = r#"{
            "start_time": "2026-01-12T09:00:00",
            "end_time": "2026-01-12T17:00:00"
        }"#;

        let i: WorkInterval = serde_json::from_str(json).unwrap();
        assert!(!i.is_rest_day);
        assert!(!i.is_holiday);
        assert!(i.project_id.is_none());
    }

    #[test]
    fn test_interval_serialization_round_trip() {
        let i = WorkInterval {
            start_time: make_datetime("2026-01-12", "09:00:00"),
            end_time: make_datetime("2026-01-13", "03:00:00"),
            is_rest_day: false,
            is_holiday: true,
            project_id: Some(Uuid::new_v4()),
        };

        let json = serde_json::to_string(&i).unwrap();
        let back: WorkInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(i, back);
    }
}
