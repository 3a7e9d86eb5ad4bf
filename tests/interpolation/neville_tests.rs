use approx::assert_relative_eq;

use divdiff::interpolation::neville::{interpolate, neville_interpolate, NevilleCfg};
use divdiff::interpolation::errors::InterpolationError;

type DivResult = Result<(), InterpolationError>;

#[test]
fn corner_is_interpolated_value() -> DivResult {
    // y = x^2 through three points, evaluated off-node
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let t = neville_interpolate(1.5, &x, &y)?;
    assert_eq!(t.size(), 3);
    assert_relative_eq!(t.last().unwrap(), 2.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn table_entries_are_window_values() -> DivResult {
    let x = [1.0, 2.0, 4.0];
    let y = [1.0, 3.0, 2.0];
    let target = 3.0;

    let t = neville_interpolate(target, &x, &y)?;

    // linear through (1,1)-(2,3) at 3 -> 5
    assert_relative_eq!(t[(1, 1)], 5.0, epsilon = 1e-12);
    // linear through (2,3)-(4,2) at 3 -> 2.5
    assert_relative_eq!(t[(2, 1)], 2.5, epsilon = 1e-12);
    // quadratic through all three at 3
    let expected = ((target - 1.0) * t[(2, 1)] - (target - 4.0) * t[(1, 1)]) / (4.0 - 1.0);
    assert_relative_eq!(t[(2, 2)], expected, epsilon = 1e-12);
    Ok(())
}

#[test]
fn first_column_is_untouched() -> DivResult {
    let x = [0.1, 0.7, 1.3, 2.9];
    let y = [0.3, -1.1, 2.7, 0.9];

    for (k, &xk) in x.iter().enumerate() {
        let t = neville_interpolate(xk, &x, &y)?;
        assert_eq!(t[(k, 0)], y[k]);
        for (i, row) in t.rows().enumerate() {
            assert_eq!(row[0], y[i]);
        }
    }
    Ok(())
}

#[test]
fn reproduces_samples_at_nodes() -> DivResult {
    let x = [0.1, 0.7, 1.3, 2.9];
    let y = [0.3, -1.1, 2.7, 0.9];

    for (&xk, &yk) in x.iter().zip(y.iter()) {
        let t = neville_interpolate(xk, &x, &y)?;
        assert_relative_eq!(t.last().unwrap(), yk, epsilon = 1e-12, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn converges_on_degree_of_sampled_polynomial() -> DivResult {
    // cubic sampled at 5 points: degree-3 and degree-4 estimates agree
    let f = |t: f64| 2.0 * t * t * t - t + 1.0;
    let x = [-2.0, -0.5, 0.0, 1.5, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();

    let t = neville_interpolate(0.75, &x, &y)?;
    assert_relative_eq!(t[(3, 3)], f(0.75), epsilon = 1e-12);
    assert_relative_eq!(t[(4, 4)], f(0.75), epsilon = 1e-12);
    Ok(())
}

#[test]
fn empty_and_single() -> DivResult {
    assert!(neville_interpolate(0.0, &[], &[])?.is_empty());
    let t = neville_interpolate(5.0, &[1.0], &[4.0])?;
    assert_eq!(t.last(), Some(4.0));
    Ok(())
}

#[test]
fn dimension_mismatch_rejected() {
    let err = neville_interpolate(2.5, &[1.0, 2.0, 3.0], &[1.0, 4.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DimensionMismatch { name: "y", x_len: 3, got: 2 }));
}

#[test]
fn driver_matches_table_corner() -> DivResult {
    let x      = [0.0, 1.0, 3.0, 6.0];
    let y      = [1.0, -1.0, 2.0, 0.5];
    let x_eval = [0.5, 2.0, 5.5];

    let rep = interpolate(NevilleCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x_eval)?)?;
    assert_eq!(rep.algorithm_name, "neville");
    assert_eq!(rep.n_provided, 4);
    assert_eq!(rep.n_evaluated, 3);

    for (&xq, &v) in x_eval.iter().zip(rep.evaluated.iter()) {
        let corner = neville_interpolate(xq, &x, &y)?.last().unwrap();
        assert_eq!(v, corner);
    }
    Ok(())
}

#[test]
fn driver_out_of_bounds() {
    let cfg = NevilleCfg::new()
        .set_x(&[0.0, 1.0]).unwrap()
        .set_y(&[0.0, 1.0]).unwrap()
        .set_x_eval(&[1.5]).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, .. } if got == 1.5));
}
