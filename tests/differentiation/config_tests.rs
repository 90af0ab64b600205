use matan::ArgumentError;
use matan::common::step::DEFAULT_STEP;
use matan::differentiation::central::{central_difference, derivative};
use matan::differentiation::config::{DerivativeCfg, DEFAULT_ORDER};
use matan::differentiation::errors::DerivativeError;


#[test]
fn defaults() {
    let cfg = DerivativeCfg::new();
    assert_eq!(cfg.step(), DEFAULT_STEP);
    assert_eq!(cfg.step(), 1e-6);
    assert_eq!(cfg.order(), DEFAULT_ORDER);
    assert_eq!(cfg.order(), 1);
}

#[test]
fn rejects_zero_order() {
    let err = DerivativeCfg::new().set_order(0).unwrap_err();
    assert_eq!(err, DerivativeError::Argument(ArgumentError::InvalidOrder { got: 0 }));
}

#[test]
fn rejects_non_positive_step() {
    for h in [0.0, -1e-6, -1.0] {
        match DerivativeCfg::new().set_step(h) {
            Err(DerivativeError::Argument(ArgumentError::InvalidStep { got })) => {
                assert_eq!(got, h);
            }
            other => panic!("expected InvalidStep, got {other:?}"),
        }
    }
}

#[test]
fn rejects_non_finite_step() {
    for h in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            DerivativeCfg::new().set_step(h),
            Err(DerivativeError::Argument(ArgumentError::InvalidStep { .. }))
        ));
    }
}

#[test]
fn invalid_arguments_never_call_f() {
    let mut calls = 0usize;

    let res = central_difference(|x: f64| { calls += 1; x }, 1.0, 0.0, 1);
    assert!(matches!(res, Err(DerivativeError::Argument(ArgumentError::InvalidStep { .. }))));

    let res = central_difference(|x: f64| { calls += 1; x }, 1.0, 1e-3, 0);
    assert!(matches!(res, Err(DerivativeError::Argument(ArgumentError::InvalidOrder { got: 0 }))));

    let res = central_difference(|x: f64| { calls += 1; x }, 1.0, -1e-3, 3);
    assert!(matches!(res, Err(DerivativeError::Argument(ArgumentError::InvalidStep { .. }))));

    assert_eq!(calls, 0);
}

#[test]
fn rejects_non_finite_point() {
    let mut calls = 0usize;

    for x0 in [f64::NAN, f64::INFINITY] {
        let res = derivative(|x: f64| { calls += 1; x }, x0, DerivativeCfg::new());
        assert!(matches!(res, Err(DerivativeError::Argument(ArgumentError::InvalidPoint { .. }))));
    }
    assert_eq!(calls, 0);
}

#[test]
fn error_messages() {
    let err = central_difference(|x: f64| x, 0.0, -2.0, 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid step: h must be finite and > 0. got h=-2");

    let err = central_difference(|x: f64| x, 0.0, 1e-3, 0).unwrap_err();
    assert_eq!(err.to_string(), "invalid order: must be >= 1. got order=0");
}
