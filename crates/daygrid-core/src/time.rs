//! Clock-time spans for single-day calendar events.
//!
//! A [`TimeSpan`] is a pair of already-resolved wall-clock instants. Daygrid
//! deliberately works with [`chrono::NaiveDateTime`]: time-zone resolution
//! and recurring-event expansion happen upstream, and the layout engine only
//! ever compares instants within one day.
//!
//! Overlap uses half-open semantics throughout: a span ending at 10:00 does
//! not overlap a span starting at 10:00, so back-to-back events share a
//! column rather than colliding.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// An inclusive-start, exclusive-end range of wall-clock time.
///
/// # Examples
///
/// ```
/// # use daygrid_core::time::TimeSpan;
/// # use chrono::NaiveDate;
/// let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let morning = TimeSpan::new(
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
/// );
/// let brunch = TimeSpan::new(
///     day.and_hms_opt(9, 30, 0).unwrap(),
///     day.and_hms_opt(10, 30, 0).unwrap(),
/// );
/// let lunch = TimeSpan::new(
///     day.and_hms_opt(10, 0, 0).unwrap(),
///     day.and_hms_opt(11, 0, 0).unwrap(),
/// );
///
/// assert!(morning.overlaps(&brunch));
/// assert!(!morning.overlaps(&lunch)); // touching ends do not overlap
/// assert_eq!(morning.duration_minutes(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSpan {
    /// Creates a new span from a start and end instant.
    ///
    /// The span is not validated here; callers that need `end > start`
    /// (the layout engine) apply their own normalization policy.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the start instant
    pub fn start(self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end instant
    pub fn end(self) -> NaiveDateTime {
        self.end
    }

    /// Returns a new span with the same start and the given end instant
    pub fn with_end(self, end: NaiveDateTime) -> Self {
        Self { end, ..self }
    }

    /// Checks whether two spans overlap in time.
    ///
    /// Half-open semantics: spans that merely touch (one's end equals the
    /// other's start) do not overlap.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the duration of the span in minutes, with sub-minute
    /// precision. Negative for inverted spans.
    pub fn duration_minutes(&self) -> f32 {
        (self.end - self.start).num_seconds() as f32 / 60.0
    }

    /// Returns the offset of the start instant from its day's midnight,
    /// in minutes. This is the vertical anchor of the span: geometry is
    /// always referenced to the start of the day the event begins on.
    pub fn minutes_into_day(&self) -> f32 {
        self.start.time().num_seconds_from_midnight() as f32 / 60.0
    }
}

/// A span of `minutes` minutes starting at `start`.
pub fn span_from_start(start: NaiveDateTime, minutes: i64) -> TimeSpan {
    TimeSpan::new(start, start + TimeDelta::minutes(minutes))
}
