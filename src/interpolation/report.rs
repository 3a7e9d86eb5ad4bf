//! Defines the struct returned by every evaluation driver.
//!
//! The raw table builders return their tables directly; the
//! `interpolate(cfg)` drivers wrap evaluated values in an
//! [`InterpolationReport`] together with run metadata.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"neville"`)
/// - `n_provided`     : number of input samples `(x, y)`
/// - `n_evaluated`    : number of points at which the interpolant was evaluated
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
