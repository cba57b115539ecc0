use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
///
/// Most degenerate inputs resolve to sentinel values (zero vectors, empty
/// point lists, zero-radius circles). These variants cover the few
/// preconditions that cannot be answered sensibly.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("cannot resize a zero-area rect ({width} x {height})")]
    ZeroArea { width: f64, height: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
