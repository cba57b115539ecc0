use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d;

use super::{Circle, Line, Vec2};

/// An axis-aligned rectangle spanning `min` to `max`.
///
/// Constructors don't reorder the corners. Call [`Rect::norm`] when the
/// orientation is not known; [`Rect::union`] and [`Rect::intersect`] assume
/// normalized inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// The canonical empty rect, also returned by non-overlapping intersections.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a rect from corner coordinates, as given.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Returns the rect with `max >= min` on both axes.
    #[must_use]
    pub fn norm(&self) -> Self {
        Self::new(
            self.min.x.min(self.max.x),
            self.min.y.min(self.max.y),
            self.min.x.max(self.max.x),
            self.min.y.max(self.max.y),
        )
    }

    /// Extent along x.
    #[must_use]
    pub fn w(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w(), self.h())
    }

    /// Width times height; negative for an unnormalized rect flipped on one axis.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.w() * self.h()
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::lerp(self.min, self.max, 0.5)
    }

    /// Returns the rect translated by `delta`.
    #[must_use]
    pub fn moved(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Returns the rect scaled to `size`, keeping the point `anchor` fixed.
    ///
    /// `r.resized(r.min, size)` keeps the min corner in place;
    /// `r.resized(r.center(), size)` keeps the center.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroArea`] if the rect has zero width or
    /// height, since there is no ratio to scale by. Use
    /// [`Rect::resized_min`] when that can happen.
    #[allow(clippy::float_cmp)]
    pub fn resized(&self, anchor: Vec2, size: Vec2) -> Result<Self> {
        if self.area() == 0.0 {
            return Err(GeometryError::ZeroArea {
                width: self.w(),
                height: self.h(),
            }
            .into());
        }
        let fraction = Vec2::new(size.x / self.w(), size.y / self.h());
        Ok(Self {
            min: anchor + anchor.to(self.min).scaled_xy(fraction),
            max: anchor + anchor.to(self.max).scaled_xy(fraction),
        })
    }

    /// Returns the rect with its `max` moved so that it has the given `size`.
    ///
    /// Works for zero-area rects.
    #[must_use]
    pub fn resized_min(&self, size: Vec2) -> Self {
        Self {
            min: self.min,
            max: self.min + size,
        }
    }

    /// Whether `v` lies inside the rect or on its border.
    #[must_use]
    pub fn contains(&self, v: Vec2) -> bool {
        self.min.x <= v.x && v.x <= self.max.x && self.min.y <= v.y && v.y <= self.max.y
    }

    /// Smallest rect covering both `self` and `s`.
    #[must_use]
    pub fn union(&self, s: &Rect) -> Self {
        Self::new(
            self.min.x.min(s.min.x),
            self.min.y.min(s.min.y),
            self.max.x.max(s.max.x),
            self.max.y.max(s.max.y),
        )
    }

    /// Overlap of `self` and `s`, or [`Rect::ZERO`] if it has no area.
    #[must_use]
    pub fn intersect(&self, s: &Rect) -> Self {
        let t = Self::new(
            self.min.x.max(s.min.x),
            self.min.y.max(s.min.y),
            self.max.x.min(s.max.x),
            self.max.y.min(s.max.y),
        );
        if t.min.x >= t.max.x || t.min.y >= t.max.y {
            return Self::ZERO;
        }
        t
    }

    /// Whether the interiors of `self` and `s` overlap.
    ///
    /// Cheaper than checking `intersect` against [`Rect::ZERO`]. Rects that
    /// only share a border don't intersect.
    #[must_use]
    pub fn intersects(&self, s: &Rect) -> bool {
        !(s.max.x <= self.min.x
            || s.min.x >= self.max.x
            || s.max.y <= self.min.y
            || s.min.y >= self.max.y)
    }

    /// Corners in winding order: `min`, `(min.x, max.y)`, `max`, `(max.x, min.y)`.
    #[must_use]
    pub fn vertices(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }

    /// The four sides, each running from one vertex to the next.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let [v0, v1, v2, v3] = self.vertices();
        [
            Line::new(v0, v1),
            Line::new(v1, v2),
            Line::new(v2, v3),
            Line::new(v3, v0),
        ]
    }

    /// Vector that moves this rect out of `c`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_circle(&self, c: &Circle) -> Vec2 {
        -intersect_2d::circle_rect_resolution(c, self)
    }

    /// Vector that moves this rect off `l`; zero when they don't overlap.
    #[must_use]
    pub fn intersect_line(&self, l: &Line) -> Vec2 {
        -intersect_2d::segment_rect_resolution(l, self)
    }

    /// Points where `l` crosses the border, nearest to `l.a` first.
    ///
    /// Each edge goes through [`Line::intersect`], whose exact on-segment test
    /// can drop a crossing of an oblique `l` to rounding.
    #[must_use]
    pub fn intersection_points(&self, l: &Line) -> Vec<Vec2> {
        intersect_2d::segment_rect_points(l, self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;

    #[test]
    fn norm_swaps_corners() {
        let r = Rect::new(10.0, 0.0, 0.0, 5.0).norm();
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn norm_is_idempotent() {
        for r in [
            Rect::new(10.0, 0.0, 0.0, 5.0),
            Rect::new(-1.0, -2.0, 3.0, 4.0),
            Rect::new(3.0, 3.0, -3.0, -3.0),
        ] {
            assert_eq!(r.norm().norm(), r.norm());
        }
    }

    #[test]
    fn size_and_center() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.size(), Vec2::new(4.0, 2.0));
        assert_eq!(r.center(), Vec2::new(2.0, 1.0));
        assert_eq!(r.area(), 8.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(0.0, 10.0)));
        assert!(r.contains(Vec2::new(10.0, 3.0)));
        assert!(!r.contains(Vec2::new(10.5, 3.0)));
        assert!(!r.contains(Vec2::new(3.0, -0.1)));
    }

    #[test]
    fn union_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 6.0, 1.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -1.0, 6.0, 2.0));
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 1.0, 6.0, 3.0);
        assert_eq!(a.intersect(&b), Rect::new(2.0, 1.0, 4.0, 3.0));
        assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    #[test]
    fn intersect_disjoint_is_zero() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 5.0, 6.0, 6.0);
        assert_eq!(a.intersect(&b), Rect::ZERO);
        // Touching along an edge has no area either.
        let c = Rect::new(1.0, 0.0, 2.0, 1.0);
        assert_eq!(a.intersect(&c), Rect::ZERO);
    }

    #[test]
    fn intersects_strict() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(&Rect::new(0.5, 0.5, 2.0, 2.0)));
        assert!(!a.intersects(&Rect::new(1.0, 0.0, 2.0, 1.0)));
        assert!(!a.intersects(&Rect::new(3.0, 3.0, 4.0, 4.0)));
    }

    #[test]
    fn vertices_and_edges_wind() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert_eq!(
            r.vertices(),
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(2.0, 0.0),
            ]
        );
        let edges = r.edges();
        for i in 0..4 {
            assert_eq!(edges[i].b, edges[(i + 1) % 4].a);
        }
    }

    #[test]
    fn resized_about_min() {
        let r = Rect::new(1.0, 1.0, 3.0, 2.0);
        let resized = r.resized(r.min, Vec2::new(4.0, 4.0)).unwrap();
        assert_eq!(resized, Rect::new(1.0, 1.0, 5.0, 5.0));
    }

    #[test]
    fn resized_about_center() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        let resized = r.resized(r.center(), Vec2::new(4.0, 4.0)).unwrap();
        assert_eq!(resized, Rect::new(-1.0, -1.0, 3.0, 3.0));
    }

    #[test]
    fn resized_zero_area_fails() {
        let r = Rect::new(0.0, 0.0, 0.0, 5.0);
        let err = r.resized(r.min, Vec2::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            PlanarError::Geometry(GeometryError::ZeroArea { .. })
        ));
    }

    #[test]
    fn resized_min_handles_zero_area() {
        let r = Rect::new(2.0, 3.0, 2.0, 3.0);
        assert_eq!(r.resized_min(Vec2::new(1.0, 2.0)), Rect::new(2.0, 3.0, 3.0, 5.0));
    }

    #[test]
    fn moved() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0).moved(Vec2::new(2.0, -1.0));
        assert_eq!(r, Rect::new(2.0, -1.0, 3.0, 0.0));
    }

    #[test]
    fn intersect_circle_containing_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let circle = Circle::new(Vec2::new(5.0, 5.0), 10.0);
        assert_eq!(r.intersect_circle(&circle), Vec2::new(-15.0, 0.0));
        assert_eq!(r.intersect_circle(&circle), -circle.intersect_rect(&r));
    }

    #[test]
    fn intersect_line_mirrors_line() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let line = Line::new(Vec2::new(-1.0, 5.0), Vec2::new(5.0, -1.0));
        assert_eq!(r.intersect_line(&line), Vec2::new(2.0, 2.0));
        assert_eq!(r.intersect_line(&line), -line.intersect_rect(&r));
    }

    #[test]
    fn intersection_points_across() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let line = Line::new(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0));
        assert_eq!(
            r.intersection_points(&line),
            vec![Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Rect::new(0.0, 1.0, 2.5, 3.0).to_string(), "Rect(0, 1, 2.5, 3)");
    }
}
