//! Interpolation by divided differences, Neville's scheme, Hermite
//! doubled-node tables and natural cubic splines.

pub mod interpolation;
