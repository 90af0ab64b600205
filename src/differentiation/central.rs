//! Central difference
//!
//! Implements the [central difference](https://en.wikipedia.org/wiki/Finite_difference#Basic_types)
//! derivative estimate, applied recursively for higher orders.
//!
//! ```text
//! f'(x0) ≈ (f(x0 + h) - f(x0 - h)) / 2h
//! ```
//!
//! The order-`n` estimate applies the same formula to the order-`n-1`
//! estimate, holding `h` fixed.

use tracing::trace;

use crate::common::eval::{eval_counted, infallible};
use crate::common::step::validate_point;
use super::algorithms::Algorithm;
use super::config::DerivativeCfg;
use super::errors::DerivativeError;
use super::report::DerivativeReport;


const ALGORITHM: Algorithm = Algorithm::CentralDifference;


/// Nested central difference.
///
/// Each level wraps the previous one in a fresh closure and samples it at
/// `x ± h`, so order `n` calls `f` exactly `2^n` times. Nothing is memoized.
/// `f` is behind `dyn` since every level has its own closure type.
fn nth_central_difference<E>(
    f: &mut dyn FnMut(f64) -> Result<f64, E>,
    x0: f64,
    h: f64,
    order: usize,
) -> Result<f64, E> {
    if order == 1 {
        let f_plus  = f(x0 + h)?;
        let f_minus = f(x0 - h)?;
        return Ok((f_plus - f_minus) / (2.0 * h));
    }

    let mut prev_order = |x: f64| nth_central_difference(&mut *f, x, h, order - 1);
    nth_central_difference(&mut prev_order, x0, h, 1)
}


/// Estimates the `order`-th derivative of a fallible `func` at `x0`.
///
/// Same as [`derivative`] except `func` returns `Result<f64, E>`. The first
/// `Err` from `func` aborts the estimate and is returned as-is; argument
/// errors are converted into `E` through `From<DerivativeError>`.
///
/// # Errors
/// - every argument error listed on [`derivative`] (`InvalidStep`,
///   `InvalidOrder`, `InvalidPoint`), converted into `E`
/// - any `E` returned by `func`
pub fn try_derivative<F, E>(
    mut func: F,
    x0: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<DerivativeError>,
{
    let (h, order) = cfg.validate()?;
    validate_point(x0).map_err(DerivativeError::from)?;

    trace!(algorithm = %ALGORITHM, x0, h, order, "estimating derivative");

    let mut report = DerivativeReport::new(ALGORITHM, x0, h, order);
    let mut evals: usize = 0;

    let derivative = {
        let mut counted = |x: f64| eval_counted(&mut func, x, &mut evals);
        nth_central_difference(&mut counted, x0, h, order)?
    };

    report.derivative  = derivative;
    report.evaluations = evals;
    Ok(report)
}


/// Estimates the `order`-th derivative of `func` at `x0` using the
/// central difference formula, applied recursively for `order > 1`.
///
/// # Arguments
/// - `func` : function to differentiate
/// - `x0`   : finite evaluation point
/// - `cfg`  : [`DerivativeCfg`] (step `h`, `order`)
///
/// # Returns
/// [`DerivativeReport`] with:
/// - `derivative`     : the estimate
/// - `order`          : requested order
/// - `point`          : `x0`
/// - `step`           : `h`
/// - `evaluations`    : `2^order`
/// - `algorithm_name` : `"central_difference"`
///
/// # Errors
/// * Propagated via [`DerivativeError::Argument`]:
/// - [`ArgumentError::InvalidStep`](crate::common::errors::ArgumentError::InvalidStep)   : `h` <= 0 or non-finite
/// - [`ArgumentError::InvalidOrder`](crate::common::errors::ArgumentError::InvalidOrder) : `order` < 1
/// - [`ArgumentError::InvalidPoint`](crate::common::errors::ArgumentError::InvalidPoint) : `x0` non-finite
///
/// All checks run before `func` is called.
///
/// # Notes
/// - Accuracy is O(h²) per level. Rounding error grows like `eps / h^order`,
///   so higher orders want a larger `h` than the default.
/// - Cost is exponential in `order`: `2^order` evaluations of `func`.
/// - Values returned by `func` are not checked; NaN or inf flows into the
///   estimate.
pub fn derivative<F>(
    func: F,
    x0: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DerivativeError>
where
    F: FnMut(f64) -> f64,
{
    try_derivative(infallible::<_, DerivativeError>(func), x0, cfg)
}


/// Shorthand for [`derivative`] taking `h` and `order` directly and
/// returning only the estimate.
///
/// # Errors
/// See [`derivative`].
pub fn central_difference<F>(
    func: F,
    x0: f64,
    h: f64,
    order: usize,
) -> Result<f64, DerivativeError>
where
    F: FnMut(f64) -> f64,
{
    let cfg = DerivativeCfg::new()
        .set_step(h)?
        .set_order(order)?;

    Ok(derivative(func, x0, cfg)?.derivative)
}
