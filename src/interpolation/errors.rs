use thiserror::Error;

/// Errors raised by table builders, checked configs and evaluators.
///
/// The raw table builders only ever return [`InterpolationError::DimensionMismatch`]
/// (plus [`InterpolationError::InsufficientPoints`] for the spline). The
/// remaining variants come from the checked `*Cfg` setters and the
/// evaluation drivers.
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("dimension mismatch: x has {x_len} elements, {name} has {got}")]
    DimensionMismatch { name: &'static str, x_len: usize, got: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}

impl InterpolationError {
    /// Length check shared by every entry point.
    #[inline]
    pub(crate) fn check_len(name: &'static str, x_len: usize, got: usize) -> Result<(), Self> {
        if x_len != got {
            return Err(InterpolationError::DimensionMismatch { name, x_len, got });
        }
        Ok(())
    }
}
