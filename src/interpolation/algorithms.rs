//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::NewtonForward`] forward divided differences anchored at `x[0]`
/// - [`Algorithm::Newton`]        general divided-difference table
/// - [`Algorithm::Neville`]       Neville iterated interpolation
/// - [`Algorithm::Hermite`]       doubled-node Hermite interpolation
/// - [`Algorithm::SplineNatural`] natural cubic spline
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    NewtonForward,
    Newton,
    Neville,
    Hermite,
    SplineNatural,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::NewtonForward => "newton forward",
            Algorithm::Newton        => "newton",
            Algorithm::Neville       => "neville",
            Algorithm::Hermite       => "hermite",
            Algorithm::SplineNatural => "natural cubic spline",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
