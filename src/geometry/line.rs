use std::fmt;

use crate::math::distance_2d::closest_point_on_segment;
use crate::math::intersect_2d;

use super::{Circle, Rect, Vec2};

/// Orientation of the infinite line through a segment, with the
/// parameters needed to evaluate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineFormula {
    /// `y = y`. Degenerate segments (`a == b`) also land here.
    Horizontal { y: f64 },
    /// `x = x`.
    Vertical { x: f64 },
    /// `y = m * x + b` with finite, non-zero `m`.
    Oblique { m: f64, b: f64 },
}

impl LineFormula {
    /// Evaluates `y` at `x`. Vertical lines have no single answer and give `NaN`.
    #[must_use]
    pub fn y_at(self, x: f64) -> f64 {
        match self {
            Self::Horizontal { y } => y,
            Self::Vertical { .. } => f64::NAN,
            Self::Oblique { m, b } => m * x + b,
        }
    }
}

/// An oriented segment from `a` to `b`.
///
/// `a == b` is allowed; queries on such a line follow the point-geometry paths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub a: Vec2,
    pub b: Vec2,
}

impl Line {
    /// Creates a new segment.
    #[must_use]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Length of the segment.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.a.to(self.b).len()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.a + self.a.to(self.b).scaled(0.5)
    }

    /// Normalized bounding rect of the segment.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.a.x, self.a.y, self.b.x, self.b.y).norm()
    }

    /// Returns the segment translated by `delta`.
    #[must_use]
    pub fn moved(&self, delta: Vec2) -> Self {
        Self::new(self.a + delta, self.b + delta)
    }

    /// Returns the segment rotated by `angle` radians around `around`.
    #[must_use]
    pub fn rotated(&self, around: Vec2, angle: f64) -> Self {
        let rotate = |v: Vec2| around + around.to(v).rotated(angle);
        Self::new(rotate(self.a), rotate(self.b))
    }

    /// Returns the segment scaled by `factor` about its own center.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.scaled_xy(self.center(), factor)
    }

    /// Returns the segment scaled by `factor` about `around`.
    #[must_use]
    pub fn scaled_xy(&self, around: Vec2, factor: f64) -> Self {
        Self::new(
            around + around.to(self.a).scaled(factor),
            around + around.to(self.b).scaled(factor),
        )
    }

    /// Classifies the infinite line through the segment.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn kind(&self) -> LineFormula {
        if self.a.y == self.b.y {
            return LineFormula::Horizontal { y: self.a.y };
        }
        let m = (self.b.y - self.a.y) / (self.b.x - self.a.x);
        if m.is_infinite() {
            LineFormula::Vertical { x: self.a.x }
        } else {
            LineFormula::Oblique {
                m,
                b: self.a.y - m * self.a.x,
            }
        }
    }

    /// Slope and intercept of `y = m * x + b`.
    ///
    /// Horizontal lines give `(0, a.y)`. Vertical lines give `(±inf, NaN)`.
    #[must_use]
    pub fn formula(&self) -> (f64, f64) {
        match self.kind() {
            LineFormula::Horizontal { y } => (0.0, y),
            LineFormula::Vertical { .. } => {
                ((self.b.y - self.a.y) / (self.b.x - self.a.x), f64::NAN)
            }
            LineFormula::Oblique { m, b } => (m, b),
        }
    }

    /// Point on the segment nearest to `v`.
    #[must_use]
    pub fn closest(&self, v: Vec2) -> Vec2 {
        closest_point_on_segment(self, v)
    }

    /// Whether `v` lies exactly on the segment.
    #[must_use]
    pub fn contains(&self, v: Vec2) -> bool {
        self.closest(v) == v
    }

    /// Crossing point of two segments.
    ///
    /// Returns `None` when the segments share the exact same direction
    /// vector, when both are vertical, or when the crossing of the infinite
    /// lines is off either segment.
    ///
    /// The on-segment test is exact, with no tolerance. An oblique crossing
    /// whose recomputed point is off by a rounding error counts as a miss, so
    /// callers that need robust hits should compare
    /// [`point_to_segment_dist`](crate::math::distance_2d::point_to_segment_dist)
    /// against a tolerance instead.
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Option<Vec2> {
        intersect_2d::segment_segment(self, other)
    }

    /// Vector that moves this segment out of `c`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_circle(&self, c: &Circle) -> Vec2 {
        intersect_2d::segment_circle_resolution(self, c)
    }

    /// Vector that moves this segment out of `r`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_rect(&self, r: &Rect) -> Vec2 {
        intersect_2d::segment_rect_resolution(self, r)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.a, self.b)
    }
}
