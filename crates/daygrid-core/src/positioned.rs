//! Provides `PositionedEvent`, the layout engine's output record.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// The pixel geometry computed for one input event.
///
/// A positioned event holds no reference to the event it was computed from:
/// the pairing is recovered through `source_index`, the event's position in
/// the caller-owned input sequence. Output is therefore plain data:
/// serializable, comparable, and safe to hold after the input is gone.
///
/// Output order is not guaranteed to match input order; `source_index` is
/// the only contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionedEvent {
    source_index: usize,
    frame: Rect,
    column: usize,
}

impl PositionedEvent {
    /// Construct a new `PositionedEvent` for the event at `source_index`
    pub fn new(source_index: usize, frame: Rect, column: usize) -> Self {
        Self {
            source_index,
            frame,
            column,
        }
    }

    /// Position of the originating event in the input sequence
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// The computed frame, relative to the day column's top-left corner
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The column this event was assigned within its collision group.
    /// Events sharing a column never overlap in time.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Checks whether a point in day-column coordinates hits this event
    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positioned_event_accessors() {
        let frame = Rect::new(150.0, 540.0, 150.0, 60.0);
        let positioned = PositionedEvent::new(3, frame, 1);

        assert_eq!(positioned.source_index(), 3);
        assert_eq!(positioned.frame(), frame);
        assert_eq!(positioned.column(), 1);
    }

    #[test]
    fn test_positioned_event_contains_delegates_to_frame() {
        let positioned = PositionedEvent::new(0, Rect::new(0.0, 0.0, 100.0, 50.0), 0);

        assert!(positioned.contains(Point::new(50.0, 25.0)));
        assert!(!positioned.contains(Point::new(100.0, 25.0)));
    }

    #[test]
    fn test_positioned_event_is_comparable() {
        let a = PositionedEvent::new(1, Rect::new(0.0, 60.0, 300.0, 30.0), 0);
        let b = PositionedEvent::new(1, Rect::new(0.0, 60.0, 300.0, 30.0), 0);
        let c = PositionedEvent::new(2, Rect::new(0.0, 60.0, 300.0, 30.0), 0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_positioned_event_serializes() {
        let positioned = PositionedEvent::new(0, Rect::new(0.0, 360.0, 300.0, 60.0), 0);
        let json = serde_json::to_string(&positioned).unwrap();

        assert!(json.contains("\"source_index\":0"));
        assert!(json.contains("\"left\":0.0"));
        assert!(json.contains("\"top\":360.0"));
    }
}
