use crate::geometry::{Line, LineFormula, Vec2};

/// Returns the point on the segment `line` nearest to `p`.
///
/// The perpendicular through `p` is intersected with the infinite line. If
/// the foot of that perpendicular falls outside the segment's extent, the
/// nearer endpoint wins. A degenerate segment (`a == b`) classifies as
/// horizontal and always resolves to an endpoint.
#[must_use]
pub fn closest_point_on_segment(line: &Line, p: Vec2) -> Vec2 {
    match line.kind() {
        LineFormula::Horizontal { y } => {
            if strictly_between(line.a.x, line.b.x, p.x) {
                Vec2::new(p.x, y)
            } else {
                nearer_endpoint(line, p)
            }
        }
        LineFormula::Vertical { x } => {
            if strictly_between(line.a.y, line.b.y, p.y) {
                Vec2::new(x, p.y)
            } else {
                nearer_endpoint(line, p)
            }
        }
        LineFormula::Oblique { m, b } => {
            let perp_m = -1.0 / m;
            let perp_b = p.y - perp_m * p.x;
            let x = (perp_b - b) / (m - perp_m);
            let y = m * x + b;
            if strictly_between(line.a.x, line.b.x, x) || strictly_between(line.a.y, line.b.y, y) {
                Vec2::new(x, y)
            } else {
                nearer_endpoint(line, p)
            }
        }
    }
}

/// Returns the distance from `p` to the nearest point of the segment `line`.
#[must_use]
pub fn point_to_segment_dist(line: &Line, p: Vec2) -> f64 {
    closest_point_on_segment(line, p).to(p).len()
}

/// Whether `x` lies strictly inside the open interval spanned by `a` and `b`.
fn strictly_between(a: f64, b: f64, x: f64) -> bool {
    a.min(b) < x && x < a.max(b)
}

fn nearer_endpoint(line: &Line, p: Vec2) -> Vec2 {
    if line.a.to(p).len() < line.b.to(p).len() {
        line.a
    } else {
        line.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    // ── closest_point_on_segment tests ──

    #[test]
    fn horizontal_projection() {
        let p = closest_point_on_segment(&seg(0.0, 0.0, 2.0, 0.0), Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn horizontal_past_end() {
        let p = closest_point_on_segment(&seg(0.0, 0.0, 2.0, 0.0), Vec2::new(-1.0, 3.0));
        assert_eq!(p, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn vertical_projection() {
        let p = closest_point_on_segment(&seg(3.0, 10.0, 3.0, 0.0), Vec2::new(-4.0, 4.0));
        assert_eq!(p, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn vertical_past_end() {
        let p = closest_point_on_segment(&seg(3.0, 10.0, 3.0, 0.0), Vec2::new(3.0, 12.0));
        assert_eq!(p, Vec2::new(3.0, 10.0));
    }

    #[test]
    fn oblique_projection() {
        // Perpendicular from (0, 4) hits y = x at (2, 2).
        let p = closest_point_on_segment(&seg(0.0, 0.0, 10.0, 10.0), Vec2::new(0.0, 4.0));
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn oblique_past_end() {
        let p = closest_point_on_segment(&seg(0.0, 0.0, 10.0, 10.0), Vec2::new(20.0, 12.0));
        assert_eq!(p, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn degenerate_segment() {
        let p = closest_point_on_segment(&seg(1.0, 1.0, 1.0, 1.0), Vec2::new(5.0, 5.0));
        assert_eq!(p, Vec2::new(1.0, 1.0));
    }

    // ── point_to_segment_dist tests ──

    #[test]
    fn dist_perpendicular() {
        let d = point_to_segment_dist(&seg(0.0, 0.0, 2.0, 0.0), Vec2::new(1.0, 1.0));
        assert_abs_diff_eq!(d, 1.0);
    }

    #[test]
    fn dist_degenerate() {
        let d = point_to_segment_dist(&seg(0.0, 0.0, 0.0, 0.0), Vec2::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0);
    }
}
