use std::f64::consts::PI;
use std::fmt;

use tracing::trace;

use crate::math::intersect_2d;

use super::{Line, Rect, Vec2};

/// A circle given by `center` and `radius`.
///
/// The radius may be negative until [`Circle::norm`] is applied. A radius of
/// zero describes a single point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle. The radius is stored as given.
    #[must_use]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the circle with a non-negative radius.
    #[must_use]
    pub fn norm(&self) -> Self {
        Self::new(self.center, self.radius.abs())
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circle translated by `delta`.
    #[must_use]
    pub fn moved(&self, delta: Vec2) -> Self {
        Self::new(self.center + delta, self.radius)
    }

    /// Returns the circle with `delta` added to its radius; the center stays put.
    #[must_use]
    pub fn resized(&self, delta: f64) -> Self {
        Self::new(self.center, self.radius + delta)
    }

    /// Whether `v` lies inside the circle or on its perimeter.
    #[must_use]
    pub fn contains(&self, v: Vec2) -> bool {
        self.radius >= self.center.to(v).len()
    }

    /// Smallest circle enclosing both `self` and `d`.
    ///
    /// Both radii are normalized first. If one circle already encloses the
    /// other, the enclosing one is returned unchanged.
    #[must_use]
    pub fn union(&self, d: &Circle) -> Self {
        let (bigger, smaller) = ordered(self.norm(), d.norm());
        let dist = bigger.center.to(smaller.center).len();

        if dist + smaller.radius <= bigger.radius {
            trace!(%bigger, %smaller, "union: smaller circle already enclosed");
            return bigger;
        }

        let radius = (dist + bigger.radius + smaller.radius) / 2.0;
        let theta = 0.5 + (bigger.radius - smaller.radius) / (2.0 * dist);
        let center = Vec2::lerp(smaller.center, bigger.center, theta);
        Self::new(center, radius)
    }

    /// Largest circle covered by both `self` and `d`.
    ///
    /// Both radii are normalized first. If one circle encloses the other, the
    /// enclosing one is returned unchanged. Circles that don't overlap give a
    /// zero-radius circle at the weighted midpoint between their centers,
    /// which marks the empty intersection.
    #[must_use]
    pub fn intersect(&self, d: &Circle) -> Self {
        let c = self.norm();
        let d = d.norm();
        let (bigger, smaller) = ordered(c, d);
        if bigger.radius >= bigger.center.to(smaller.center).len() + smaller.radius {
            trace!(%bigger, %smaller, "intersect: one circle encloses the other");
            return bigger;
        }

        let dist = c.center.to(d.center).len();
        let diff = dist - (c.radius + d.radius);
        let to_midpoint = c.radius + 0.5 * diff;
        let center = Vec2::lerp(c.center, d.center, to_midpoint / dist);

        if dist >= c.radius + d.radius {
            trace!(%c, %d, "intersect: circles are disjoint");
            return Self::new(center, 0.0);
        }
        Self::new(center, diff.abs())
    }

    /// Vector that moves this circle off `l`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_line(&self, l: &Line) -> Vec2 {
        -intersect_2d::segment_circle_resolution(l, self)
    }

    /// Vector that moves this circle out of `r`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_rect(&self, r: &Rect) -> Vec2 {
        intersect_2d::circle_rect_resolution(self, r)
    }

    /// Points where `l` crosses the perimeter, nearest to `l.a` first.
    ///
    /// Yields zero, one or two points. A segment lying entirely inside the
    /// circle crosses nothing.
    #[must_use]
    pub fn intersection_points(&self, l: &Line) -> Vec<Vec2> {
        intersect_2d::segment_circle_points(l, self)
    }
}

/// Splits two circles into `(bigger, smaller)` by radius. Ties keep argument order.
fn ordered(c: Circle, d: Circle) -> (Circle, Circle) {
    if c.radius < d.radius {
        (d, c)
    } else {
        (c, d)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {:.2})", self.center, self.radius)
    }
}
