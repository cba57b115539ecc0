//! A 2D computational-geometry kernel.
//!
//! Value types ([`Vec2`], [`Line`], [`Rect`], [`Circle`]) with containment,
//! intersection and resolution-vector queries between every pair of them.
//! Resolution vectors follow one convention throughout: `a.intersect_x(&b)`
//! is the translation that moves `a` clear of `b`, and the mirrored call on
//! `b` returns its negation.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, PlanarError, Result};
pub use geometry::{Circle, Line, LineFormula, Rect, Vec2};
