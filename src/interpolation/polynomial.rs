//! Newton-form polynomials.
//!
//! A [`NewtonPolynomial`] stores nodes `z` and coefficients `c` with
//!
//! ```text
//! P(x) = c[0] + c[1](x - z0) + c[2](x - z0)(x - z1) + ... + c[m-1](x - z0)...(x - z_{m-2})
//! ```
//!
//! Both the Newton divided-difference coefficients and the Hermite
//! coefficients live in this basis; the Hermite nodes are simply doubled.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::hermite::{doubled_nodes, hermite_interpolate};
use crate::interpolation::newton::{forward_divided_difference, general_divided_difference};
use crate::interpolation::traits::Interpolator;


#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    nodes: Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonPolynomial {
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if `nodes` and `coeffs`
    ///   differ in length.
    pub fn new(nodes: Vec<f64>, coeffs: Vec<f64>) -> Result<Self, InterpolationError> {
        InterpolationError::check_len("coefficients", nodes.len(), coeffs.len())?;
        Ok(Self { nodes, coeffs })
    }

    /// Newton forward-difference polynomial through `(x, y)`.
    pub fn from_forward_differences(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let coeffs = forward_divided_difference(x, y)?;
        Ok(Self { nodes: x.to_vec(), coeffs })
    }

    /// Newton general-form polynomial; coefficients are the table diagonal.
    pub fn from_divided_differences(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let coeffs = general_divided_difference(x, y)?.diagonal();
        Ok(Self { nodes: x.to_vec(), coeffs })
    }

    /// Hermite polynomial matching `y` and `dy` at every node.
    pub fn hermite(x: &[f64], y: &[f64], dy: &[f64]) -> Result<Self, InterpolationError> {
        let coeffs = hermite_interpolate(x, y, dy)?;
        Ok(Self { nodes: doubled_nodes(x), coeffs })
    }

    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }

    /// Nominal degree, `len - 1`. `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// `P(x)` by Horner's scheme. The empty polynomial evaluates to `0`.
    pub fn value(&self, x: f64) -> f64 {
        let m = self.coeffs.len();
        if m == 0 {
            return 0.0;
        }

        let mut p = self.coeffs[m - 1];
        for j in (0..m - 1).rev() {
            p = self.coeffs[j] + (x - self.nodes[j]) * p;
        }
        p
    }

    /// `P'(x)`, accumulated alongside the Horner recurrence.
    pub fn derivative(&self, x: f64) -> f64 {
        let m = self.coeffs.len();
        if m < 2 {
            return 0.0;
        }

        let mut p  = self.coeffs[m - 1];
        let mut dp = 0.0;
        for j in (0..m - 1).rev() {
            let dx = x - self.nodes[j];
            dp = p + dx * dp;
            p  = self.coeffs[j] + dx * p;
        }
        dp
    }
}

impl Interpolator for NewtonPolynomial {
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.value(x))
    }
}
