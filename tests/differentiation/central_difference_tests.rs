use approx::assert_abs_diff_eq;
use matan::differentiation::central::{central_difference, derivative};
use matan::differentiation::{DerivativeCfg, DerivativeError, DerivativeReport};

type TestResult = Result<(), DerivativeError>;


#[test]
fn square_first_derivative_at_three() -> TestResult {
    let f = |x: f64| x * x;

    let d = central_difference(f, 3.0, 1e-4, 1)?;
    assert_abs_diff_eq!(d, 6.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn square_first_derivative_tracks_two_x0() -> TestResult {
    let f = |x: f64| x * x;

    for x0 in [-7.5, -1.0, 0.0, 0.25, 4.0, 12.0] {
        let d = central_difference(f, x0, 1e-4, 1)?;
        assert_abs_diff_eq!(d, 2.0 * x0, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn linear_function_is_exact_on_dyadic_step() -> TestResult {
    let f = |x: f64| 2.0 * x + 1.0;

    let d = central_difference(f, 1.0, 0.5, 1)?;
    assert_eq!(d, 2.0);
    Ok(())
}

#[test]
fn cube_second_derivative_at_two() -> TestResult {
    let f = |x: f64| x * x * x;

    // nested central difference is exact for cubics up to rounding
    let d = central_difference(f, 2.0, 1e-3, 2)?;
    assert_abs_diff_eq!(d, 12.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn cube_second_derivative_with_default_step() -> TestResult {
    let f = |x: f64| x * x * x;

    let rep = derivative(f, 2.0, DerivativeCfg::new().set_order(2)?)?;
    assert_abs_diff_eq!(rep.derivative, 12.0, epsilon = 1e-2);
    assert_eq!(rep.step, 1e-6);
    Ok(())
}

#[test]
fn sine_third_derivative_at_zero() -> TestResult {
    let d = central_difference(f64::sin, 0.0, 1e-2, 3)?;
    assert_abs_diff_eq!(d, -1.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn exp_fourth_derivative_at_zero() -> TestResult {
    let d = central_difference(f64::exp, 0.0, 1e-2, 4)?;
    assert_abs_diff_eq!(d, 1.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn evaluations_grow_as_two_to_the_order() -> TestResult {
    for order in 1..=6 {
        let mut calls = 0usize;
        let f = |x: f64| { calls += 1; x.cos() };

        let cfg = DerivativeCfg::new()
            .set_step(1e-2)?
            .set_order(order)?;
        let rep = derivative(f, 0.3, cfg)?;

        assert_eq!(calls, 1 << order);
        assert_eq!(rep.evaluations, 1 << order);
    }
    Ok(())
}

#[test]
fn report_carries_inputs() -> TestResult {
    let cfg = DerivativeCfg::new()
        .set_step(1e-3)?
        .set_order(2)?;

    let rep: DerivativeReport = derivative(|x: f64| x.exp(), 0.5, cfg)?;
    assert_eq!(rep.algorithm_name, "central_difference");
    assert_eq!(rep.order, 2);
    assert_eq!(rep.point, 0.5);
    assert_eq!(rep.step, 1e-3);
    assert_abs_diff_eq!(rep.derivative, 0.5_f64.exp(), epsilon = 1e-5);
    Ok(())
}

#[test]
fn nan_from_f_flows_through() -> TestResult {
    let d = central_difference(|_x: f64| f64::NAN, 0.0, 1e-3, 1)?;
    assert!(d.is_nan());
    Ok(())
}
