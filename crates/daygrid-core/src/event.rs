//! The calendar event model.
//!
//! Two pieces live here:
//!
//! - [`Timed`], the seam the layout engine is generic over. Any host type
//!   that can report a start and end instant can be laid out directly; the
//!   engine never mutates or retains caller events.
//! - [`Event`], the concrete host-facing event used by the day surface and
//!   the paginated calendar. It carries the two required temporal fields,
//!   display text, and an opaque payload parameter that rides through the
//!   system untouched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time::TimeSpan;

/// Anything with a start and end instant.
///
/// Implemented by [`Event`] and by [`TimeSpan`] itself; references to an
/// implementor also implement it, so slices of borrowed events can be laid
/// out without copying.
pub trait Timed {
    /// The start instant
    fn start(&self) -> NaiveDateTime;

    /// The end instant
    fn end(&self) -> NaiveDateTime;

    /// The start/end pair as a [`TimeSpan`]
    fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start(), self.end())
    }
}

impl Timed for TimeSpan {
    fn start(&self) -> NaiveDateTime {
        TimeSpan::start(*self)
    }

    fn end(&self) -> NaiveDateTime {
        TimeSpan::end(*self)
    }
}

impl<T: Timed + ?Sized> Timed for &T {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}

/// A calendar event: a time span, display text, and an opaque payload.
///
/// The payload parameter `P` is a passthrough for whatever the host
/// attaches to its events (an id, a whole record, `serde_json::Value` for
/// wire data). Daygrid never inspects it; interaction callbacks hand back
/// the original event so the host can read its own payload out again.
///
/// # Examples
///
/// ```
/// # use daygrid_core::event::{Event, Timed};
/// # use chrono::NaiveDate;
/// let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let event = Event::new(
///     "Standup",
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(9, 30, 0).unwrap(),
/// )
/// .with_summary("Daily sync in the blue room")
/// .with_payload(42u32);
///
/// assert_eq!(event.title(), "Standup");
/// assert_eq!(*event.payload(), 42);
/// assert_eq!(event.span().duration_minutes(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: Deserialize<'de> + Default"
))]
pub struct Event<P = ()> {
    #[serde(flatten)]
    span: TimeSpan,

    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,

    #[serde(default)]
    payload: P,
}

impl Event<()> {
    /// Creates a new event with the given title and instants and no payload
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            span: TimeSpan::new(start, end),
            title: title.into(),
            summary: None,
            payload: (),
        }
    }
}

impl<P> Event<P> {
    /// Sets the summary text (builder style)
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Attaches a payload, replacing any existing one (builder style)
    pub fn with_payload<Q>(self, payload: Q) -> Event<Q> {
        Event {
            span: self.span,
            title: self.title,
            summary: self.summary,
            payload,
        }
    }

    /// Returns the event's time span
    pub fn time_span(&self) -> TimeSpan {
        self.span
    }

    /// Returns the event title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the summary text, if any
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Returns a reference to the opaque payload
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P> Timed for Event<P> {
    fn start(&self) -> NaiveDateTime {
        self.span.start()
    }

    fn end(&self) -> NaiveDateTime {
        self.span.end()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_event_new_defaults() {
        let event = Event::new("Standup", at(9, 0), at(9, 30));
        assert_eq!(event.title(), "Standup");
        assert!(event.summary().is_none());
        assert_eq!(event.start(), at(9, 0));
        assert_eq!(event.end(), at(9, 30));
    }

    #[test]
    fn test_event_with_summary_and_payload() {
        let event = Event::new("Review", at(14, 0), at(15, 0))
            .with_summary("Quarterly numbers")
            .with_payload("record-17");
        assert_eq!(event.summary(), Some("Quarterly numbers"));
        assert_eq!(*event.payload(), "record-17");
    }

    #[test]
    fn test_timed_for_references() {
        let event = Event::new("Standup", at(9, 0), at(9, 30));
        let borrowed = &event;
        // The blanket impl lets borrowed events flow through Timed code
        assert_eq!(Timed::start(&borrowed), at(9, 0));
        assert_eq!(borrowed.span(), event.time_span());
    }

    #[test]
    fn test_timed_for_time_span() {
        let span = TimeSpan::new(at(9, 0), at(10, 0));
        assert_eq!(Timed::start(&span), at(9, 0));
        assert_eq!(Timed::end(&span), at(10, 0));
        assert_eq!(span.span(), span);
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let event: Event = serde_json::from_str(
            r#"{"title": "Standup", "start": "2026-03-14T09:00:00", "end": "2026-03-14T09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(event.title(), "Standup");
        assert!(event.summary().is_none());
        assert_eq!(event.time_span().duration_minutes(), 30.0);
    }

    #[test]
    fn test_deserialize_with_payload() {
        let event: Event<serde_json::Value> = serde_json::from_str(
            r#"{
                "title": "Review",
                "summary": "Quarterly numbers",
                "start": "2026-03-14T14:00:00",
                "end": "2026-03-14T15:00:00",
                "payload": {"id": 17}
            }"#,
        )
        .unwrap();
        assert_eq!(event.summary(), Some("Quarterly numbers"));
        assert_eq!(event.payload()["id"], 17);
    }

    #[test]
    fn test_deserialize_missing_payload_defaults() {
        let event: Event<serde_json::Value> = serde_json::from_str(
            r#"{"title": "Standup", "start": "2026-03-14T09:00:00", "end": "2026-03-14T09:30:00"}"#,
        )
        .unwrap();
        assert!(event.payload().is_null());
    }
}
