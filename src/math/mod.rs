pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default relative tolerance for [`nearly_equal`].
pub const EQ_TOLERANCE: f64 = 1e-6;

/// Relative floating-point comparison.
///
/// Returns `true` when `|a - b| / (|a| + |b|) < epsilon`. When either value is
/// exactly zero, or the difference is subnormal, relative error is meaningless
/// and the difference must instead be below `epsilon * f64::MIN_POSITIVE`,
/// which in practice demands exact equality near zero.
///
/// Symmetric in `a` and `b`, and reflexive for every non-NaN input.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn nearly_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        return diff < epsilon * f64::MIN_POSITIVE;
    }
    diff / (a.abs() + b.abs()).min(f64::MAX) < epsilon
}
