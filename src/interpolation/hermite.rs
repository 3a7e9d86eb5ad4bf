//! Hermite Interpolation
//!
//! Builds the polynomial of degree `2n - 1` that matches both `f(x_i)` and
//! `f'(x_i)` at every sample, using a
//! [doubled-node divided-difference table](https://en.wikipedia.org/wiki/Hermite_interpolation).
//!
//! Each node is listed twice, `z[2i] = z[2i+1] = x[i]`. The first difference
//! between the two copies would be `0/0`; the known derivative takes its
//! place. Every other entry follows the ordinary Newton recurrence, so the
//! table is filled by the same routine as [`crate::interpolation::newton`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_values, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::NewtonPolynomial;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::DerivativeSampleSet;
use crate::interpolation::table::{fill_divided_differences, DividedDifferenceTable};
use crate::interpolation::traits::Interpolator;


/// Hermite interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `dy`     : first derivatives at each `x`
///
/// # Construction
/// - Use [`HermiteCfg::new`], the common setters and [`HermiteCfg::set_dy`].
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    dy: &'a [f64],
}
impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(1), dy: &[] }
    }

    pub fn set_dy(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        check_values("dy", self.common.x.len(), v)?;
        self.dy = v;
        Ok(self)
    }

    pub fn dy(&self) -> &'a [f64] { self.dy }
}
impl Default for HermiteCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(HermiteCfg<'a>);


/// `[x0, x0, x1, x1, ...]`
pub(crate) fn doubled_nodes(x: &[f64]) -> Vec<f64> {
    x.iter().flat_map(|&xi| [xi, xi]).collect()
}


/// Builds the full doubled-node table of size `2n`.
///
/// Seeding, for each sample `i`:
/// - `t[2i][0] = t[2i+1][0] = y[i]`
/// - `t[2i+1][1] = dy[i]`
/// - `t[2i][1] = (y[i] - y[i-1]) / (x[i] - x[i-1])` for `i >= 1`
///
/// Orders `2..2n` are then filled with the divided-difference recurrence
/// over the doubled nodes.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `y` or `dy` disagree in
///   length with `x`.
pub fn hermite_table(
    x: &[f64],
    y: &[f64],
    dy: &[f64],
) -> Result<DividedDifferenceTable, InterpolationError> {
    let samples = DerivativeSampleSet::new(x, y, dy)?;
    let (y, dy) = (samples.y(), samples.dy());

    let z = doubled_nodes(samples.x());
    let mut table = DividedDifferenceTable::zeros(z.len());

    for i in 0..samples.len() {
        let (lo, hi) = (2 * i, 2 * i + 1);
        table.set(lo, 0, y[i]);
        table.set(hi, 0, y[i]);
        table.set(hi, 1, dy[i]);

        if i > 0 {
            let v = (table[(lo, 0)] - table[(lo - 1, 0)]) / (z[lo] - z[lo - 1]);
            table.set(lo, 1, v);
        }
    }

    fill_divided_differences(&mut table, &z, 2);

    Ok(table)
}


/// Hermite coefficients: the diagonal of [`hermite_table`].
///
/// The result has `2n` entries and is expressed in the Newton basis over
/// the doubled nodes, `(x - x0)^2 (x - x1)^2 ...`. A single sample yields
/// `[y0, dy0]`; no samples yield an empty vector.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `y` or `dy` disagree in
///   length with `x`.
pub fn hermite_interpolate(
    x: &[f64],
    y: &[f64],
    dy: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    Ok(hermite_table(x, y, dy)?.diagonal())
}


/// Performs Hermite interpolation at every evaluation point.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x`, `y` or `dy` was never set.
/// - [`InterpolationError::DimensionMismatch`] if `dy` disagrees with `x`.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    if cfg.dy.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    cfg.common.check_bounds()?;

    let x = cfg.common.x();
    let poly = NewtonPolynomial::hermite(x, cfg.common.y(), cfg.dy)?;

    poly.eval_report(Algorithm::Hermite, x.len(), cfg.common.x_eval())
}
