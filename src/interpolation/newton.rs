//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Two table builders are provided:
//! - [`forward_divided_difference`] : the coefficient vector alone, computed
//!   in place one order at a time
//! - [`general_divided_difference`] : the full triangular table, whose
//!   diagonal holds the same coefficients
//!
//! [`interpolate`] evaluates the resulting polynomial at query points using
//! Horner's scheme.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::NewtonPolynomial;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::table::{fill_divided_differences, DividedDifferenceTable};
use crate::interpolation::traits::Interpolator;


/// Which builder [`interpolate`] takes its coefficients from.
/// Both describe the same polynomial.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum NewtonForm {
    Forward,
    #[default]
    General,
}

impl NewtonForm {
    fn algorithm(self) -> Algorithm {
        match self {
            NewtonForm::Forward => Algorithm::NewtonForward,
            NewtonForm::General => Algorithm::Newton,
        }
    }
}


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `form`   : [`NewtonForm`], general table by default
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed `x` spacing between consecutive samples;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
    form: NewtonForm,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(1), form: NewtonForm::default() }
    }

    pub fn with_form(mut self, form: NewtonForm) -> Self { self.form = form; self }
    pub fn form(&self) -> NewtonForm { self.form }
}
impl Default for NewtonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Computes Newton forward divided-difference coefficients.
///
/// Works on a copy of `y`. For each order `i`, entries `j >= i` are replaced
/// by `(y[j] - prev) / (x[j] - x[j-i])`, where `prev` is the value entry
/// `j - 1` held *before* this order's update.
///
/// Returns `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `x.len() != y.len()`.
pub fn forward_divided_difference(x: &[f64], y: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let samples = SampleSet::new(x, y)?;
    let x = samples.x();
    let n = samples.len();

    let mut c = samples.y().to_vec();

    for i in 1..n {
        let mut prev = c[i - 1];
        for j in i..n {
            let cur = c[j];
            c[j] = (cur - prev) / (x[j] - x[j - i]);
            prev = cur;
        }
    }

    Ok(c)
}


/// Builds the full divided-difference table.
///
/// ```text
/// t[i][0] = y[i]
/// t[i][j] = (t[i][j-1] - t[i-1][j-1]) / (x[i] - x[i-j]),   1 <= j <= i
/// ```
///
/// The diagonal `t[i][i]` holds the Newton general-form coefficients.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `x.len() != y.len()`.
pub fn general_divided_difference(
    x: &[f64],
    y: &[f64],
) -> Result<DividedDifferenceTable, InterpolationError> {
    let samples = SampleSet::new(x, y)?;

    let mut table = DividedDifferenceTable::seeded(samples.y());
    fill_divided_differences(&mut table, samples.x(), 1);

    Ok(table)
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Builds coefficients `c[i]` with the builder chosen by [`NewtonForm`].
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner's nested form:
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"` or `"newton forward"`
/// - `n_provided`     : number of (x, y) samples
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    cfg.common.check_bounds()?;

    let x = cfg.common.x();
    let y = cfg.common.y();

    let poly = match cfg.form {
        NewtonForm::Forward => NewtonPolynomial::from_forward_differences(x, y)?,
        NewtonForm::General => NewtonPolynomial::from_divided_differences(x, y)?,
    };

    poly.eval_report(cfg.form.algorithm(), x.len(), cfg.common.x_eval())
}
