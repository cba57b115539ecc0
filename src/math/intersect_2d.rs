use std::f64::consts::PI;

use tracing::trace;

use crate::geometry::{Circle, Line, LineFormula, Rect, Vec2};

/// Below this, the contained-endpoint triangle in [`segment_circle_points`]
/// is treated as collinear with the circle's center.
const COLLINEAR_ANGLE: f64 = 1e-12;

/// Crossing point of two segments.
///
/// The infinite lines are solved in slope/intercept form, special-casing
/// vertical lines, and the result is kept only if it lies exactly on both
/// segments. Segments whose direction vectors are identical are rejected up
/// front. Proportional but unequal directions (e.g. reversed) get past that
/// check and rely on the on-segment test instead.
#[must_use]
pub fn segment_segment(l: &Line, k: &Line) -> Option<Vec2> {
    let l_dir = l.a.to(l.b);
    let k_dir = k.a.to(k.b);
    if l_dir == k_dir {
        trace!(%l, %k, "segments share a direction");
        return None;
    }

    let point = match (l.kind(), k.kind()) {
        (LineFormula::Vertical { .. }, LineFormula::Vertical { .. }) => return None,
        (LineFormula::Vertical { x }, other) | (other, LineFormula::Vertical { x }) => {
            Vec2::new(x, other.y_at(x))
        }
        (lf, kf) => {
            let (lm, lb) = slope_intercept(lf);
            let (km, kb) = slope_intercept(kf);
            let x = (kb - lb) / (lm - km);
            Vec2::new(x, lm * x + lb)
        }
    };

    if l.contains(point) && k.contains(point) {
        Some(point)
    } else {
        None
    }
}

fn slope_intercept(f: LineFormula) -> (f64, f64) {
    match f {
        LineFormula::Horizontal { y } => (0.0, y),
        LineFormula::Vertical { .. } => (f64::INFINITY, f64::NAN),
        LineFormula::Oblique { m, b } => (m, b),
    }
}

/// Vector that moves segment `l` clear of circle `c`.
///
/// The segment is pushed away from the center along the line through the
/// center and the segment's closest point, until that point sits on the
/// perimeter. A segment through the center is pushed along its normal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_circle_resolution(l: &Line, c: &Circle) -> Vec2 {
    let closest = l.closest(c.center);
    let center_to_closest = c.center.to(closest);
    let dist = center_to_closest.len();
    if dist >= c.radius {
        return Vec2::ZERO;
    }

    let direction = if dist == 0.0 {
        l.a.to(l.b).normal().unit()
    } else {
        center_to_closest.unit()
    };
    direction.scaled(c.radius - dist)
}

/// Vector that moves segment `l` clear of rect `r`.
///
/// With an endpoint inside `r`, the segment's bounding box is pushed out
/// through whichever side of `r` is nearest (ties go horizontal). Otherwise,
/// if the segment crosses an edge, it is moved so that its point nearest to
/// one of the corners lands on that corner. Corners the segment already
/// passes through are skipped.
#[must_use]
pub fn segment_rect_resolution(l: &Line, r: &Rect) -> Vec2 {
    if r.contains(l.a) || r.contains(l.b) {
        let bounds = l.bounds();
        let exits = [
            Vec2::new(r.max.x - bounds.min.x, 0.0),
            Vec2::new(r.min.x - bounds.max.x, 0.0),
            Vec2::new(0.0, r.max.y - bounds.min.y),
            Vec2::new(0.0, r.min.y - bounds.max.y),
        ];
        let mut shortest = exits[0];
        for exit in &exits[1..] {
            if exit.len() < shortest.len() {
                shortest = *exit;
            }
        }
        return shortest;
    }

    if !r.edges().iter().any(|edge| l.intersect(edge).is_some()) {
        return Vec2::ZERO;
    }

    let mut best: Option<(Vec2, Vec2)> = None;
    for corner in r.vertices() {
        let on_line = l.closest(corner);
        if on_line == corner || !r.contains(on_line) {
            continue;
        }
        let nearer = best.is_none_or(|(best_on_line, best_corner)| {
            on_line.to(corner).len() < best_on_line.to(best_corner).len()
        });
        if nearer {
            best = Some((on_line, corner));
        }
    }

    match best {
        Some((on_line, corner)) => on_line.to(corner),
        None => {
            trace!(%l, %r, "segment crosses rect but no corner projects inside");
            Vec2::ZERO
        }
    }
}

/// Vector that moves circle `c` clear of rect `r`.
///
/// When the center lies within the rect's horizontal or vertical band, the
/// penetration depth is measured on both axes and the shallower one wins
/// (ties go horizontal). When the center is off in a diagonal quadrant, only
/// a corner can be inside the circle, and the circle is pushed directly away
/// from the nearest such corner.
#[must_use]
pub fn circle_rect_resolution(c: &Circle, r: &Rect) -> Vec2 {
    let within_x = r.min.x <= c.center.x && c.center.x <= r.max.x;
    let within_y = r.min.y <= c.center.y && c.center.y <= r.max.y;

    if within_x || within_y {
        let pad = Vec2::new(c.radius, c.radius);
        let grown = Rect {
            min: r.min - pad,
            max: r.max + pad,
        };
        if !grown.contains(c.center) {
            return Vec2::ZERO;
        }

        let offset = r.center().to(c.center);
        let mut h = c.radius - offset.x.abs() + r.w() / 2.0;
        let mut v = c.radius - offset.y.abs() + r.h() / 2.0;
        if offset.x < 0.0 {
            h = -h;
        }
        if offset.y < 0.0 {
            v = -v;
        }
        if h.abs() > v.abs() {
            return Vec2::new(0.0, v);
        }
        return Vec2::new(h, 0.0);
    }

    let nearest = r
        .vertices()
        .into_iter()
        .filter(|&corner| c.contains(corner))
        .min_by(|p, q| c.center.to(*p).len().total_cmp(&c.center.to(*q).len()));
    let Some(corner) = nearest else {
        return Vec2::ZERO;
    };

    let corner_to_center = corner.to(c.center);
    corner_to_center
        .unit()
        .scaled(c.radius - corner_to_center.len())
}

/// Points where segment `l` crosses the perimeter of `c`, nearest to `l.a`
/// first.
///
/// - Both endpoints inside: none.
/// - Closest approach beyond the radius: none.
/// - Closest approach exactly at the radius (tangent): the touching point.
/// - An endpoint at the center: one point, a radius along the segment.
/// - One endpoint inside: one point, solved with the law of sines on the
///   triangle (center, inside endpoint, crossing).
/// - Otherwise: two points, offset both ways along the segment from the
///   closest approach by the half chord.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn segment_circle_points(l: &Line, c: &Circle) -> Vec<Vec2> {
    let contains_a = c.contains(l.a);
    let contains_b = c.contains(l.b);
    if contains_a && contains_b {
        return Vec::new();
    }

    let closest = l.closest(c.center);
    let dist = closest.to(c.center).len();
    if dist > c.radius {
        return Vec::new();
    }
    if dist == c.radius {
        trace!(%l, %c, "segment is tangent");
        return vec![closest];
    }

    if c.center == l.a || c.center == l.b {
        let other = if c.center == l.b { l.a } else { l.b };
        return vec![c.center + c.center.to(other).unit().scaled(c.radius)];
    }

    if contains_a || contains_b {
        let (inside, other) = if contains_a { (l.a, l.b) } else { (l.b, l.a) };
        let to_center = inside.to(c.center);
        let to_other = inside.to(other);

        // Sides: a = inside..center, b = center..crossing (the radius),
        // side_c = inside..crossing. Angles are named after opposite sides.
        let a = to_center.len();
        let b = c.radius;
        let angle_b = to_center.angle() - to_other.angle();
        let angle_a = (a * angle_b.sin() / b).clamp(-1.0, 1.0).asin();
        let side_c = if angle_a.abs() < COLLINEAR_ANGLE {
            b + a * angle_b.cos()
        } else {
            let angle_c = PI - angle_a - angle_b;
            a * angle_c.sin() / angle_a.sin()
        };
        return vec![inside + to_other.unit().scaled(side_c)];
    }

    let half_chord = (c.radius * c.radius - dist * dist).sqrt();
    let first = closest + closest.to(l.a).unit().scaled(half_chord);
    let second = closest + closest.to(l.b).unit().scaled(half_chord);
    if first.to(l.a).len() < second.to(l.a).len() {
        vec![first, second]
    } else {
        vec![second, first]
    }
}

/// Points where segment `l` crosses the border of `r`, deduplicated, nearest
/// to `l.a` first when there are two.
#[must_use]
pub fn segment_rect_points(l: &Line, r: &Rect) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::with_capacity(2);
    for edge in r.edges() {
        if let Some(p) = l.intersect(&edge) {
            if !points.contains(&p) {
                points.push(p);
            }
        }
    }

    if let [first, second] = *points.as_slice() {
        if second.to(l.a).len() < first.to(l.a).len() {
            points.swap(0, 1);
        }
    }
    points
}
