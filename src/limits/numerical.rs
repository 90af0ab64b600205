//! Numerical limits
//!
//! Approximates `lim_{x -> x0} f(x)` by sampling `f` one step `h` away from
//! `x0`, on one side or on both.
//!
//! ```text
//! left   : f(x0 - h)
//! right  : f(x0 + h)
//! both   : (f(x0 - h) + f(x0 + h)) / 2   if |f(x0 - h) - f(x0 + h)| < 100 h
//!          indeterminate                 otherwise
//! ```

use tracing::{debug, trace};

use crate::common::eval::{eval_counted, infallible};
use crate::common::step::validate_point;
use super::algorithms::{agreement_tolerance, Algorithm};
use super::config::LimitCfg;
use super::errors::LimitError;
use super::estimate::LimitEstimate;
use super::report::LimitReport;
use super::side::Side;


/// Estimates the limit of a fallible `func` as `x -> x0`.
///
/// Same as [`limit`] except `func` returns `Result<f64, E>`. The first `Err`
/// from `func` is returned as-is; argument errors are converted into `E`
/// through `From<LimitError>`.
///
/// # Errors
/// - every argument error listed on [`limit`] (`InvalidStep`, `InvalidPoint`),
///   converted into `E`
/// - any `E` returned by `func`
pub fn try_limit<F, E>(
    mut func: F,
    x0: f64,
    cfg: LimitCfg,
) -> Result<LimitReport, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<LimitError>,
{
    let (h, side) = cfg.validate()?;
    validate_point(x0).map_err(LimitError::from)?;

    let algorithm = Algorithm::from(side);
    trace!(algorithm = %algorithm, x0, h, "estimating limit");

    let mut report = LimitReport::new(side, x0, h);
    let mut evals: usize = 0;

    match side {
        Side::Left => {
            let left = eval_counted(&mut func, x0 - h, &mut evals)?;
            report.left     = Some(left);
            report.estimate = LimitEstimate::Value(left);
        }

        Side::Right => {
            let right = eval_counted(&mut func, x0 + h, &mut evals)?;
            report.right    = Some(right);
            report.estimate = LimitEstimate::Value(right);
        }

        Side::Both => {
            let left  = eval_counted(&mut func, x0 - h, &mut evals)?;
            let right = eval_counted(&mut func, x0 + h, &mut evals)?;
            let gap   = (left - right).abs();
            let tol   = agreement_tolerance(h);

            // NaN gap fails the comparison
            report.estimate = if gap < tol {
                LimitEstimate::Value((left + right) / 2.0)
            } else {
                debug!(x0, left, right, gap, tol, "one-sided limits disagree");
                LimitEstimate::Indeterminate
            };

            report.left      = Some(left);
            report.right     = Some(right);
            report.gap       = Some(gap);
            report.tolerance = Some(tol);
        }
    }

    report.evaluations = evals;
    Ok(report)
}


/// Estimates the limit of `func` as `x` approaches `x0`.
///
/// # Arguments
/// - `func` : function whose limit is sought
/// - `x0`   : finite target point
/// - `cfg`  : [`LimitCfg`] (side, step `h`)
///
/// # Returns
/// [`LimitReport`] with:
/// - `estimate`       : [`LimitEstimate::Value`] or [`LimitEstimate::Indeterminate`]
/// - `left`, `right`  : sampled one-sided values
/// - `gap`, `tolerance` : two-sided agreement check, `None` when one-sided
/// - `evaluations`    : 1 (one-sided) or 2 (two-sided)
/// - `algorithm_name` : `"one_sided_left"`, `"one_sided_right"` or `"two_sided"`
///
/// # Errors
/// * Propagated via [`LimitError::Argument`]:
/// - [`ArgumentError::InvalidStep`](crate::common::errors::ArgumentError::InvalidStep)   : `h` <= 0 or non-finite
/// - [`ArgumentError::InvalidPoint`](crate::common::errors::ArgumentError::InvalidPoint) : `x0` non-finite
///
/// # Behavior
/// - [`Side::Left`]  : returns `f(x0 - h)`, no tolerance check
/// - [`Side::Right`] : returns `f(x0 + h)`, no tolerance check
/// - [`Side::Both`]  : returns the midpoint of the two samples when
///   `|left - right| < 100 * h` (strict), otherwise
///   [`LimitEstimate::Indeterminate`]
///
/// # Notes
/// - The band is absolute in `f` and scales with `h` only; functions with
///   large slope near `x0` can be reported indeterminate even when continuous
///   if `2h * |f'(x0)| >= 100h`, i.e. `|f'(x0)| >= 50`.
pub fn limit<F>(
    func: F,
    x0: f64,
    cfg: LimitCfg,
) -> Result<LimitReport, LimitError>
where
    F: FnMut(f64) -> f64,
{
    try_limit(infallible::<_, LimitError>(func), x0, cfg)
}


/// Shorthand for [`limit`] taking `side` and `h` directly and returning only
/// the estimate.
///
/// # Errors
/// See [`limit`].
pub fn numerical_limit<F>(
    func: F,
    x0: f64,
    side: Side,
    h: f64,
) -> Result<LimitEstimate, LimitError>
where
    F: FnMut(f64) -> f64,
{
    let cfg = LimitCfg::new()
        .set_side(side)
        .set_step(h)?;

    Ok(limit(func, x0, cfg)?.estimate)
}
