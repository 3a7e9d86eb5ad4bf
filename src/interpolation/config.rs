//! Shared configuration for the checked interpolation drivers.
//!
//! Provides [`CommonCfg`] with the default minimum allowed spacing between
//! adjacent `x` samples; [`DEFAULT_X_TOL`]. Shared by all `*Cfg` builders.
//!
//! [`CommonCfg`] universal fields:
//! - `x`             : sample abscissae
//! - `y`             : sample values
//! - `x_eval`        : points to evaluate the interpolant at
//! - `x_min_spacing` : minimum gap between consecutive `x`
//! - `min_points`    : fewest samples the method accepts
//!
//! Unlike the raw table builders, which accept any equal-length input, the
//! setters generated by `impl_common_cfg!` reject non-finite, unordered and
//! (near-)duplicate abscissae up front.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) min_points: usize,
}

impl<'a> CommonCfg<'a> {
    pub fn new(min_points: usize) -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            min_points,
        }
    }

    /// Final check before a driver runs; catches a missing `set_x`/`set_y`.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        InterpolationError::check_len("y", x.len(), y.len())?;
        if x.len() < self.min_points {
            return Err(InterpolationError::InsufficientPoints { got: x.len(), need: self.min_points });
        }
        Ok(())
    }

    /// Fails on the first evaluation point outside `[x[0], x[n-1]]`.
    pub(crate) fn check_bounds(&self) -> Result<(), InterpolationError> {
        let (x_min, x_max) = (self.x[0], self.x[self.x.len() - 1]);
        match self.x_eval.iter().find(|&&xq| xq < x_min || xq > x_max) {
            Some(&got) => Err(InterpolationError::OutOfBounds { got, x_min, x_max }),
            None => Ok(()),
        }
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn min_points(&self) -> usize { self.min_points }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Checks a value vector against the already-set `x`, if any.
pub(crate) fn check_values(
    name: &'static str,
    x_len: usize,
    v: &[f64],
) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if x_len != 0 {
        InterpolationError::check_len(name, x_len, v.len())?;
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < self.common.min_points {
                    return Err(InterpolationError::InsufficientPoints {
                        got: v.len(),
                        need: self.common.min_points,
                    });
                }
                for i in 1..v.len() {
                    if (v[i] - v[i - 1]).abs() < self.common.x_min_spacing {
                        return Err(InterpolationError::DuplicateX {
                            x1: v[i - 1],
                            x2: v[i],
                        });
                    }
                    if v[i] <= v[i - 1] {
                        return Err(InterpolationError::NonIncreasingX);
                    }
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 {
                    InterpolationError::check_len("y", v.len(), y_len)?;
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_values("y", self.common.x.len(), v)?;
                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
