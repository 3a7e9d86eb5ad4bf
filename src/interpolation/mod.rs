pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod samples;
pub mod table;
pub mod traits;
pub use traits::Interpolator;

pub mod hermite;
pub mod neville;
pub mod newton;
pub mod polynomial;
pub mod spline;

pub use errors::InterpolationError;
pub use hermite::{hermite_interpolate, hermite_table};
pub use neville::neville_interpolate;
pub use newton::{forward_divided_difference, general_divided_difference};
pub use polynomial::NewtonPolynomial;
pub use samples::{DerivativeSampleSet, SampleSet};
pub use spline::natural::{natural_cubic_spline, NaturalSpline, SplineCoefficients};
pub use table::DividedDifferenceTable;
