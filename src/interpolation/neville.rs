//! Neville Iterated Interpolation
//!
//! Evaluates the interpolating polynomial at a single target without
//! forming its coefficients, via
//! [Neville's algorithm](https://en.wikipedia.org/wiki/Neville%27s_algorithm).
//!
//! The table has the same triangular shape as the divided-difference table,
//! but entry `(i, j)` is a *value*: the degree-`j` polynomial through
//! samples `i-j..=i`, evaluated at the target. Reading a row left to right
//! shows how the estimate settles as the degree grows.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::table::DividedDifferenceTable;


/// Neville interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NevilleCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct NevilleCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NevilleCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(1) }
    }
}
impl Default for NevilleCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NevilleCfg<'a>);


/// Builds the Neville table for `target`.
///
/// ```text
/// t[i][0] = y[i]
/// t[i][j] = ((target - x[i-j]) t[i][j-1] - (target - x[i]) t[i-1][j-1]) / (x[i] - x[i-j])
/// ```
///
/// `t[n-1][n-1]` is the degree-`(n-1)` interpolated value at `target`.
/// The first column is copied from `y` untouched, so `t[k][0] == y[k]`
/// exactly.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `x.len() != y.len()`.
pub fn neville_interpolate(
    target: f64,
    x: &[f64],
    y: &[f64],
) -> Result<DividedDifferenceTable, InterpolationError> {
    let samples = SampleSet::new(x, y)?;
    let x = samples.x();

    let mut table = DividedDifferenceTable::seeded(samples.y());

    for i in 1..table.size() {
        for j in 1..=i {
            let lo = target - x[i - j];
            let hi = target - x[i];
            let v  = (lo * table[(i, j - 1)] - hi * table[(i - 1, j - 1)]) / (x[i] - x[i - j]);
            table.set(i, j, v);
        }
    }

    Ok(table)
}


/// Performs Neville interpolation at every evaluation point.
///
/// One table is built per point; the report carries each table's corner.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: NevilleCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    cfg.common.check_bounds()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(Algorithm::Neville, x.len(), evals.len());

    for &xq in evals {
        let table = neville_interpolate(xq, x, y)?;
        // validate() guarantees at least one sample
        let v = table.last().unwrap_or(f64::NAN);
        report.evaluated.push(v);
    }

    Ok(report)
}
