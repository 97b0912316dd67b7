//! Geometric primitives for calendar layout and hit testing.
//!
//! This module provides the pixel-space types used throughout Daygrid for
//! positioning gridlines, labels, and event rectangles inside a day column.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in day-column space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - A rectangle anchored at its top-left corner
//!
//! # Coordinate System
//!
//! Daygrid uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the day column at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward, later in the day)
//!
//! Rectangles are anchored at their top-left corner because every frame the
//! layout engine produces is specified as offsets from the day column's
//! top-left edge.

use serde::Serialize;

/// A 2D point representing a position in day-column coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at
/// top-left with Y increasing downward (see [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use daygrid_core::geometry::Point;
/// let tap = Point::new(120.0, 380.0);
/// assert_eq!(tap.x(), 120.0);
/// assert_eq!(tap.y(), 380.0);
///
/// let shifted = tap.translate(-50.0, -30.0);
/// assert_eq!(shifted.x(), 70.0);
/// assert_eq!(shifted.y(), 350.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point offset by the given deltas
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A rectangle anchored at its top-left corner.
///
/// `Rect` is the unit of the layout engine's output geometry: each event is
/// assigned one frame giving its left offset, top offset, width, and height
/// in pixels. Horizontal extents are half-open (`[left, right)`), so two
/// rectangles that merely touch edges do not intersect.
///
/// # Examples
///
/// ```
/// # use daygrid_core::geometry::{Point, Rect};
/// let frame = Rect::new(150.0, 540.0, 150.0, 60.0);
/// assert_eq!(frame.right(), 300.0);
/// assert_eq!(frame.bottom(), 600.0);
/// assert!(frame.contains(Point::new(150.0, 540.0)));
/// assert!(!frame.contains(Point::new(300.0, 540.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a top-left point and a size
    pub fn from_point_size(top_left: Point, size: Size) -> Self {
        Self {
            left: top_left.x(),
            top: top_left.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    /// Returns the left edge of the rectangle
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the top edge of the rectangle
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the right edge of the rectangle (`left + width`)
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns the bottom edge of the rectangle (`top + height`)
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Returns the top-left corner as a [`Point`]
    pub fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the dimensions as a [`Size`]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns a new rectangle offset by the given deltas; size is unchanged
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// Edges are half-open: the left and top edges are inside, the right
    /// and bottom edges are not. A tap exactly on the seam between two
    /// adjacent event rectangles therefore hits exactly one of them.
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.left
            && point.x() < self.right()
            && point.y() >= self.top
            && point.y() < self.bottom()
    }

    /// Checks whether the horizontal extents `[left, right)` of two
    /// rectangles intersect, ignoring their vertical placement.
    pub fn intersects_horizontally(self, other: &Rect) -> bool {
        self.left < other.right() && other.left < self.right()
    }

    /// Checks whether two rectangles intersect in both axes
    pub fn intersects(self, other: &Rect) -> bool {
        self.intersects_horizontally(other) && self.top < other.bottom() && other.top < self.bottom()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(left, top, w, h)| Rect::new(left, top, w, h))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Horizontal intersection should be commutative.
    fn check_horizontal_intersection_is_commutative(
        a: Rect,
        b: Rect,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(
            a.intersects_horizontally(&b),
            b.intersects_horizontally(&a)
        );
        Ok(())
    }

    /// A rectangle with positive dimensions should contain its own top-left
    /// corner but not its bottom-right corner (half-open edges).
    fn check_contains_corners(rect: Rect) -> Result<(), TestCaseError> {
        prop_assert!(rect.contains(rect.top_left()));
        prop_assert!(!rect.contains(Point::new(rect.right(), rect.bottom())));
        Ok(())
    }

    /// A contained point stays contained after translating both by the
    /// same offset.
    fn check_translate_preserves_containment(
        rect: Rect,
        point: Point,
        offset: Point,
    ) -> Result<(), TestCaseError> {
        prop_assume!(rect.contains(point));
        let moved_rect = rect.translate(offset.x(), offset.y());
        let moved_point = point.translate(offset.x(), offset.y());
        // Float addition is not exact; allow the seam cases to move by a ulp
        let slack = 0.01;
        prop_assert!(
            moved_rect.contains(moved_point)
                || (moved_point.x() - moved_rect.left()).abs() < slack
                || (moved_point.x() - moved_rect.right()).abs() < slack
                || (moved_point.y() - moved_rect.top()).abs() < slack
                || (moved_point.y() - moved_rect.bottom()).abs() < slack
        );
        Ok(())
    }

    /// A rectangle always intersects itself, in each axis and in both.
    fn check_self_intersection(rect: Rect) -> Result<(), TestCaseError> {
        prop_assert!(rect.intersects_horizontally(&rect));
        prop_assert!(rect.intersects(&rect));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #![proptest_config(ProptestConfig {
            max_global_rejects: 100_000,
            ..ProptestConfig::default()
        })]

        #[test]
        fn horizontal_intersection_is_commutative(a in rect_strategy(), b in rect_strategy()) {
            check_horizontal_intersection_is_commutative(a, b)?;
        }

        #[test]
        fn contains_corners(rect in rect_strategy()) {
            check_contains_corners(rect)?;
        }

        #[test]
        fn translate_preserves_containment(
            rect in rect_strategy(),
            point in point_strategy(),
            offset in point_strategy(),
        ) {
            check_translate_preserves_containment(rect, point, offset)?;
        }

        #[test]
        fn self_intersection(rect in rect_strategy()) {
            check_self_intersection(rect)?;
        }
    }
}
