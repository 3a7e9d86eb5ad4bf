use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately by each interpolant
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates many points into an [`InterpolationReport`]
    fn eval_report(
        &self,
        algorithm: Algorithm,
        n_provided: usize,
        xs: &[f64],
    ) -> Result<InterpolationReport, InterpolationError> {
        let mut report = InterpolationReport::new(algorithm, n_provided, xs.len());
        report.evaluated = self.eval_many(xs)?;
        Ok(report)
    }
}
