use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use nalgebra::Rotation2;

use crate::error::{GeometryError, Result};
use crate::math::{nearly_equal, Point2, Vector2, EQ_TOLERANCE};

/// A 2D point or displacement.
///
/// `PartialEq` is exact. Use [`Vec2::approx_eq`] where accumulated rounding
/// error is expected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the unit vector pointing at `angle` radians from the +X axis.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Returns the components as a tuple.
    #[must_use]
    pub fn xy(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the vector from `self` to `v`.
    #[must_use]
    pub fn to(self, v: Self) -> Self {
        v - self
    }

    /// Returns the vector scaled uniformly by `c`.
    #[must_use]
    pub fn scaled(self, c: f64) -> Self {
        Self::new(self.x * c, self.y * c)
    }

    /// Returns the component-wise product with `v`.
    #[must_use]
    pub fn scaled_xy(self, v: Self) -> Self {
        Self::new(self.x * v.x, self.y * v.y)
    }

    /// Returns the vector with both components rounded down.
    #[must_use]
    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    /// Applies `f` to both components.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Dot product of `self` and `v`.
    #[must_use]
    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Returns the z component of the 3D cross product of `self` and `v`.
    #[must_use]
    pub fn cross(self, v: Self) -> f64 {
        self.x * v.y - v.x * self.y
    }

    /// Euclidean length.
    #[must_use]
    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the +X axis in `[-pi, pi]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the vector of length 1 with the same angle.
    ///
    /// The zero vector has no direction; `(1, 0)` is returned for it.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn unit(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 {
            return Self::new(1.0, 0.0);
        }
        self.scaled(1.0 / self.len())
    }

    /// Returns the vector rotated counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        (Rotation2::new(angle) * Vector2::from(self)).into()
    }

    /// Returns the vector rotated counter-clockwise by 90 degrees.
    #[must_use]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Scalar projection of `self` onto `v`.
    ///
    /// `v` must be non-zero: the zero vector yields `NaN`. See
    /// [`Vec2::try_project`] for a checked version.
    #[must_use]
    pub fn project(self, v: Self) -> f64 {
        self.dot(v) / v.len()
    }

    /// Scalar projection of `self` onto `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `v` has zero length.
    #[allow(clippy::float_cmp)]
    pub fn try_project(self, v: Self) -> Result<f64> {
        let len = v.len();
        if len == 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.dot(v) / len)
    }

    /// Vector projection of `self` onto `v`.
    #[must_use]
    pub fn project_onto(self, v: Self) -> Self {
        v.unit().scaled(self.project(v))
    }

    /// Affine interpolation: `t = 0` gives `a`, `t = 1` gives `b`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        a.scaled(1.0 - t) + b.scaled(t)
    }

    /// Compares both components with [`nearly_equal`] at [`EQ_TOLERANCE`].
    #[must_use]
    pub fn approx_eq(self, v: Self) -> bool {
        self.approx_eq_eps(v, EQ_TOLERANCE)
    }

    /// Compares both components with [`nearly_equal`] at `epsilon`.
    #[must_use]
    pub fn approx_eq_eps(self, v: Self, epsilon: f64) -> bool {
        nearly_equal(self.x, v.x, epsilon) && nearly_equal(self.y, v.y, epsilon)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec({}, {})", self.x, self.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Point2 {
    fn from(v: Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}
