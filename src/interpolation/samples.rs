//! Sample sets shared by every interpolation method.
//!
//! [`SampleSet`] pairs `x` with `f(x)`; [`DerivativeSampleSet`] adds
//! `f'(x)` for Hermite interpolation. Both only enforce equal lengths.
//! Ordering and spacing of `x` are the caller's responsibility here; the
//! checked `*Cfg` builders are the place to validate those.

use crate::interpolation::errors::InterpolationError;


/// Borrowed `(x, f(x))` pairs of equal length.
#[derive(Debug, Copy, Clone)]
pub struct SampleSet<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> SampleSet<'a> {
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if `x.len() != y.len()`.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        InterpolationError::check_len("y", x.len(), y.len())?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}


/// A [`SampleSet`] plus first derivatives at each node.
#[derive(Debug, Copy, Clone)]
pub struct DerivativeSampleSet<'a> {
    samples: SampleSet<'a>,
    dy: &'a [f64],
}

impl<'a> DerivativeSampleSet<'a> {
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if `y` or `dy` disagree
    ///   in length with `x`.
    pub fn new(x: &'a [f64], y: &'a [f64], dy: &'a [f64]) -> Result<Self, InterpolationError> {
        let samples = SampleSet::new(x, y)?;
        InterpolationError::check_len("dy", x.len(), dy.len())?;
        Ok(Self { samples, dy })
    }

    pub fn samples(&self) -> SampleSet<'a> { self.samples }
    pub fn x(&self) -> &'a [f64] { self.samples.x }
    pub fn y(&self) -> &'a [f64] { self.samples.y }
    pub fn dy(&self) -> &'a [f64] { self.dy }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}
