//! Natural Cubic Spline
//!
//! Piecewise cubic interpolant with continuous first and second
//! derivatives and `S''(x_0) = S''(x_{n-1}) = 0`.
//!
//! The second-derivative coefficients solve a tridiagonal system. The
//! solve runs as three ordered passes, each depending on all of the
//! previous one:
//! 1. `eliminate`           forward elimination, producing `a, b, c`
//! 2. `back_substitute`     `C[i] = c[i] - b[i] C[i+1]`, from the right
//! 3. `derive_coefficients` `B` and `D` per segment from `C`


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::helpers::{find_interval, spacings};
use crate::interpolation::traits::Interpolator;


/// Fewest samples that define a spline segment.
pub const MIN_SPLINE_POINTS: usize = 2;


/// Per-segment coefficients of
/// `S_i(x) = A_i + B_i (x - x_i) + C_i (x - x_i)^2 + D_i (x - x_i)^3`.
///
/// All four vectors have one entry per segment, in segment order.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCoefficients {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub d: Vec<f64>,
}

impl SplineCoefficients {
    pub fn segments(&self) -> usize { self.a.len() }

    /// `S_i(x)`, where `x_i` is the left knot of segment `i`.
    pub fn eval_segment(&self, i: usize, x_i: f64, x: f64) -> f64 {
        let dx = x - x_i;
        self.a[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i]))
    }

    /// `S_i'(x)`
    pub fn derivative_segment(&self, i: usize, x_i: f64, x: f64) -> f64 {
        let dx = x - x_i;
        self.b[i] + dx * (2.0 * self.c[i] + dx * 3.0 * self.d[i])
    }

    /// `S_i''(x)`
    pub fn second_derivative_segment(&self, i: usize, x_i: f64, x: f64) -> f64 {
        2.0 * self.c[i] + 6.0 * self.d[i] * (x - x_i)
    }
}


/// Working coefficients left by forward elimination. The pivots `a` are
/// consumed during the sweep; back substitution only needs `b` and `c`.
#[derive(Debug, Clone)]
pub(crate) struct Elimination {
    pub(crate) b: Vec<f64>,
    pub(crate) c: Vec<f64>,
}


/// `alpha[i] = 3(y[i+1]-y[i])/h[i] - 3(y[i]-y[i-1])/h[i-1]` for interior `i`;
/// `alpha[0]` is unused and left at zero.
pub(crate) fn alphas(y: &[f64], h: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut alpha = vec![0.0; n - 1];

    for i in 1..n - 1 {
        alpha[i] = 3.0 * (y[i + 1] - y[i]) / h[i] - 3.0 * (y[i] - y[i - 1]) / h[i - 1];
    }

    alpha
}


/// Forward elimination with the natural end conditions
/// `a[0] = a[n-1] = 1`, `b[0] = 0`, `c[0] = c[n-1] = 0`.
pub(crate) fn eliminate(x: &[f64], h: &[f64], alpha: &[f64]) -> Elimination {
    let n = x.len();

    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n - 1];
    let mut c = vec![0.0; n];
    a[0] = 1.0;

    for i in 1..n - 1 {
        a[i] = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * b[i - 1];
        b[i] = h[i] / a[i];
        c[i] = (alpha[i] - h[i - 1] * c[i - 1]) / a[i];
    }
    a[n - 1] = 1.0;

    Elimination { b, c }
}


/// Recovers `C` for every knot, `C[n-1] = 0`, walking right to left.
pub(crate) fn back_substitute(elim: &Elimination) -> Vec<f64> {
    let n = elim.c.len();
    let mut c_full = vec![0.0; n];

    for i in (0..n - 1).rev() {
        c_full[i] = elim.c[i] - elim.b[i] * c_full[i + 1];
    }

    c_full
}


/// Builds `(A, B, C, D)` per segment from the knot values of `C`.
pub(crate) fn derive_coefficients(y: &[f64], h: &[f64], c_full: &[f64]) -> SplineCoefficients {
    let segments = h.len();

    let mut b = Vec::with_capacity(segments);
    let mut d = Vec::with_capacity(segments);

    for i in 0..segments {
        b.push((y[i + 1] - y[i]) / h[i] - h[i] * (c_full[i + 1] + 2.0 * c_full[i]) / 3.0);
        d.push((c_full[i + 1] - c_full[i]) / (3.0 * h[i]));
    }

    SplineCoefficients {
        a: y[..segments].to_vec(),
        b,
        c: c_full[..segments].to_vec(),
        d,
    }
}


/// Natural cubic spline coefficients for `(x, y)`.
///
/// No ordering check is made on `x`; a zero step length propagates as
/// `inf`/`NaN` in the affected coefficients.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `x.len() != y.len()`.
/// - [`InterpolationError::InsufficientPoints`] if fewer than
///   [`MIN_SPLINE_POINTS`] samples are given.
pub fn natural_cubic_spline(x: &[f64], y: &[f64]) -> Result<SplineCoefficients, InterpolationError> {
    let samples = SampleSet::new(x, y)?;
    if samples.len() < MIN_SPLINE_POINTS {
        return Err(InterpolationError::InsufficientPoints {
            got: samples.len(),
            need: MIN_SPLINE_POINTS,
        });
    }
    let (x, y) = (samples.x(), samples.y());

    let h      = spacings(x);
    let alpha  = alphas(y, &h);
    let elim   = eliminate(x, &h, &alpha);
    let c_full = back_substitute(&elim);

    Ok(derive_coefficients(y, &h, &c_full))
}


/// Evaluable natural spline: knots plus [`SplineCoefficients`].
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalSpline {
    knots: Vec<f64>,
    coeffs: SplineCoefficients,
}

impl NaturalSpline {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let coeffs = natural_cubic_spline(x, y)?;
        Ok(Self { knots: x.to_vec(), coeffs })
    }

    pub fn knots(&self) -> &[f64] { &self.knots }
    pub fn coefficients(&self) -> &SplineCoefficients { &self.coeffs }

    fn segment(&self, xq: f64) -> Result<usize, InterpolationError> {
        let x_min = self.knots[0];
        let x_max = self.knots[self.knots.len() - 1];
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        Ok(find_interval(&self.knots, xq))
    }

    /// `S'(x)`
    pub fn derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        let i = self.segment(xq)?;
        Ok(self.coeffs.derivative_segment(i, self.knots[i], xq))
    }
}

impl Interpolator for NaturalSpline {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let i = self.segment(xq)?;
        Ok(self.coeffs.eval_segment(i, self.knots[i], xq))
    }
}


/// Natural spline configuration
///
/// # Fields
/// - `common` : [`CommonCfg`], requiring at least [`MIN_SPLINE_POINTS`]
#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(MIN_SPLINE_POINTS) }
    }
}
impl Default for NaturalSplineCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


/// Evaluate a natural cubic spline
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x = cfg.common.x();
    let spline = NaturalSpline::new(x, cfg.common.y())?;

    spline.eval_report(Algorithm::SplineNatural, x.len(), cfg.common.x_eval())
}
