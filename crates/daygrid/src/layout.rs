//! Event layout engine for day columns.
//!
//! Given a day's events and a pixel width, [`LayoutEngine::arrange`]
//! assigns every event a frame inside the column so that temporally
//! overlapping events never intersect horizontally and non-overlapping
//! events reuse the full width. The computation runs in four passes over
//! call-local collections:
//!
//! 1. Stable sort by start instant, ties broken by input index.
//! 2. Grouping: split the sorted sequence into collision groups, the
//!    maximal clusters connected by a transitive chain of overlaps
//!    ([`group::collision_groups`]).
//! 3. Column assignment: greedy lowest-free-column placement within each
//!    group ([`columns::assign`]); the column count equals the maximum
//!    number of events active at any single instant in the group.
//! 4. Geometry: horizontal frames from column indices, widened rightward
//!    across columns with no concurrent occupant; vertical frames as an
//!    affine image of clock time.
//!
//! The engine is pure and stateless across calls: identical input yields
//! bit-identical output, and nothing survives the call.

mod columns;
mod group;

use log::debug;

use daygrid_core::{
    event::Timed,
    geometry::Rect,
    positioned::PositionedEvent,
    time::{TimeSpan, span_from_start},
};

use crate::{config::LayoutConfig, error::DaygridError};

/// One event in flight through the layout passes: its position in the
/// caller's input sequence plus its (possibly clamped) span.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) index: usize,
    pub(crate) span: TimeSpan,
}

/// The day-column layout engine.
///
/// Configured by value, consumed by reference: one engine can arrange any
/// number of event sets, concurrently if the caller wishes, since
/// [`arrange`](LayoutEngine::arrange) reads no shared state.
///
/// # Degenerate events
///
/// An event whose end does not come after its start is clamped to
/// [`min_event_minutes`](LayoutEngine::with_min_event_minutes) from its
/// start instant, so every input event yields exactly one output record.
/// The clamp is applied before grouping and therefore participates in
/// overlap detection like any other duration.
///
/// # Examples
///
/// ```
/// # use daygrid::LayoutEngine;
/// # use daygrid_core::time::TimeSpan;
/// # use chrono::NaiveDate;
/// let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let events = vec![
///     TimeSpan::new(day.and_hms_opt(9, 0, 0).unwrap(), day.and_hms_opt(10, 0, 0).unwrap()),
///     TimeSpan::new(day.and_hms_opt(9, 30, 0).unwrap(), day.and_hms_opt(10, 30, 0).unwrap()),
/// ];
///
/// let engine = LayoutEngine::new();
/// let positioned = engine.arrange(&events, 300.0).unwrap();
///
/// assert_eq!(positioned.len(), 2);
/// assert_eq!(positioned[0].frame().width(), 150.0);
/// assert_eq!(positioned[1].frame().left(), 150.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    hour_height: f32,
    min_event_minutes: i64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            min_event_minutes: 25,
        }
    }
}

impl LayoutEngine {
    /// Create a new engine with the default scale (60 px per hour, one
    /// pixel per minute) and a 25-minute minimum displayable duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from a [`LayoutConfig`] section.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            hour_height: config.hour_height(),
            min_event_minutes: config.min_event_minutes(),
        }
    }

    /// Set the vertical scale in pixels per hour (builder style).
    pub fn with_hour_height(mut self, hour_height: f32) -> Self {
        self.hour_height = hour_height;
        self
    }

    /// Set the minimum displayable duration in minutes (builder style).
    pub fn with_min_event_minutes(mut self, minutes: i64) -> Self {
        self.min_event_minutes = minutes;
        self
    }

    /// Returns the vertical scale in pixels per hour.
    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    /// Lay out `events` inside a column of `total_width` pixels.
    ///
    /// Returns one [`PositionedEvent`] per input event. Output order is
    /// not guaranteed to match input order; `source_index` recovers the
    /// pairing exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::InvalidWidth`] if `total_width` is not a
    /// finite, strictly positive number. No partial layout is attempted.
    pub fn arrange<T: Timed>(
        &self,
        events: &[T],
        total_width: f32,
    ) -> Result<Vec<PositionedEvent>, DaygridError> {
        if !total_width.is_finite() || total_width <= 0.0 {
            return Err(DaygridError::InvalidWidth { width: total_width });
        }

        let mut entries: Vec<Entry> = events
            .iter()
            .enumerate()
            .map(|(index, event)| Entry {
                index,
                span: self.normalize(event.span()),
            })
            .collect();
        entries.sort_by(|a, b| {
            a.span
                .start()
                .cmp(&b.span.start())
                .then_with(|| a.index.cmp(&b.index))
        });

        let groups = group::collision_groups(&entries);
        debug!(
            event_count = events.len(),
            group_count = groups.len();
            "Arranging day column"
        );

        let mut positioned = Vec::with_capacity(entries.len());
        for group in groups {
            self.arrange_group(group, total_width, &mut positioned);
        }
        Ok(positioned)
    }

    /// Clamp degenerate spans to the minimum displayable duration.
    fn normalize(&self, span: TimeSpan) -> TimeSpan {
        if span.end() <= span.start() {
            span_from_start(span.start(), self.min_event_minutes)
        } else {
            span
        }
    }

    /// Assign columns and compute frames for one collision group.
    fn arrange_group(&self, group: &[Entry], total_width: f32, out: &mut Vec<PositionedEvent>) {
        let columns = columns::assign(group);
        let column_width = total_width / columns.len() as f32;
        let minute_height = self.hour_height / 60.0;

        for (column_index, column) in columns.iter().enumerate() {
            for &position in column.entries() {
                let entry = &group[position];
                let reachable =
                    columns::reachable_columns(&columns, column_index, entry.span, group);

                let frame = Rect::new(
                    column_index as f32 * column_width,
                    entry.span.minutes_into_day() * minute_height,
                    reachable as f32 * column_width,
                    entry.span.duration_minutes() * minute_height,
                );
                out.push(PositionedEvent::new(entry.index, frame, column_index));
            }
        }
    }
}
