use approx::{assert_abs_diff_eq, assert_relative_eq};

use divdiff::interpolation::hermite::{hermite_interpolate, hermite_table, interpolate, HermiteCfg};
use divdiff::interpolation::errors::InterpolationError;
use divdiff::interpolation::polynomial::NewtonPolynomial;

type DivResult = Result<(), InterpolationError>;

#[test]
fn cubic_from_two_samples() -> DivResult {
    // f = x^3, f' = 3x^2 on {0, 1}
    let c = hermite_interpolate(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 3.0])?;
    assert_eq!(c, vec![0.0, 0.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn doubled_table_seeding() -> DivResult {
    let x  = [0.0, 1.0];
    let y  = [0.0, 1.0];
    let dy = [0.0, 3.0];

    let t = hermite_table(&x, &y, &dy)?;
    assert_eq!(t.size(), 4);
    assert_eq!(t.row(0), &[0.0]);
    assert_eq!(t.row(1), &[0.0, 0.0]);
    assert_eq!(t.row(2), &[1.0, 1.0, 1.0]);
    assert_eq!(t.row(3), &[1.0, 3.0, 2.0, 1.0]);
    Ok(())
}

#[test]
fn textbook_three_nodes() -> DivResult {
    // classic Bessel J0 table
    let x  = [1.3, 1.6, 1.9];
    let y  = [0.620_086_0, 0.455_402_2, 0.281_818_6];
    let dy = [-0.522_023_2, -0.569_895_9, -0.581_157_1];

    let p = NewtonPolynomial::hermite(&x, &y, &dy)?;
    assert_eq!(p.coefficients().len(), 6);
    assert_abs_diff_eq!(p.value(1.5), 0.511_827_7, epsilon = 1e-6);
    Ok(())
}

#[test]
fn reproduces_values_and_derivatives() -> DivResult {
    let x:  Vec<f64> = vec![-1.0, -0.2, 0.4, 1.1];
    let y:  Vec<f64> = x.iter().map(|&t| t.sin()).collect();
    let dy: Vec<f64> = x.iter().map(|&t| t.cos()).collect();

    let p = NewtonPolynomial::hermite(&x, &y, &dy)?;
    assert_eq!(p.degree(), Some(7));
    for i in 0..x.len() {
        assert_relative_eq!(p.value(x[i]), y[i], epsilon = 1e-12, max_relative = 1e-9);
        assert_relative_eq!(p.derivative(x[i]), dy[i], epsilon = 1e-9, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn derivative_matches_finite_difference() -> DivResult {
    let x  = [0.0, 0.5, 2.0];
    let y  = [1.0, 0.0, 3.0];
    let dy = [2.0, -1.0, 0.5];

    let p = NewtonPolynomial::hermite(&x, &y, &dy)?;
    let h = 1e-6;
    for &xi in &x {
        let fd = (p.value(xi + h) - p.value(xi - h)) / (2.0 * h);
        assert_abs_diff_eq!(fd, p.derivative(xi), epsilon = 1e-5);
    }
    Ok(())
}

#[test]
fn single_sample_is_value_and_slope() -> DivResult {
    assert_eq!(hermite_interpolate(&[2.0], &[5.0], &[-3.0])?, vec![5.0, -3.0]);
    Ok(())
}

#[test]
fn no_samples() -> DivResult {
    assert!(hermite_interpolate(&[], &[], &[])?.is_empty());
    Ok(())
}

#[test]
fn dimension_mismatch_rejected() {
    let err = hermite_interpolate(&[1.0, 2.0, 3.0], &[1.0, 4.0], &[1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DimensionMismatch { name: "y", x_len: 3, got: 2 }));

    let err = hermite_interpolate(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0], &[2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DimensionMismatch { name: "dy", x_len: 3, got: 1 }));
}

#[test]
fn driver_report() -> DivResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 8.0];
    let dy     = [0.0, 3.0, 12.0];
    let x_eval = [0.5, 1.5];

    let cfg = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_dy(&dy)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "hermite");
    assert_eq!(rep.n_provided, 3);
    assert_relative_eq!(rep.evaluated[0], 0.125, epsilon = 1e-12);
    assert_relative_eq!(rep.evaluated[1], 3.375, epsilon = 1e-12);
    Ok(())
}

#[test]
fn driver_missing_dy() {
    let cfg = HermiteCfg::new()
        .set_x(&[0.0, 1.0]).unwrap()
        .set_y(&[0.0, 1.0]).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn driver_dy_length_checked() {
    let cfg = HermiteCfg::new().set_x(&[0.0, 1.0, 2.0]).unwrap();
    let err = cfg.set_dy(&[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DimensionMismatch { name: "dy", x_len: 3, got: 1 }));
}

#[test]
fn driver_dy_set_before_x() {
    let cfg = HermiteCfg::new()
        .set_dy(&[1.0]).unwrap()
        .set_x(&[0.0, 1.0]).unwrap()
        .set_y(&[0.0, 1.0]).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::DimensionMismatch { name: "dy", x_len: 2, got: 1 }));
}
