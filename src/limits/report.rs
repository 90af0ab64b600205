//! Defines the [`LimitReport`] struct returned by all limit algorithms.

use super::algorithms::Algorithm;
use super::estimate::LimitEstimate;
use super::side::Side;


/// Final report returned by all limit algorithms.
///
/// [`LimitReport`]
/// - `estimate`       : [`LimitEstimate`], the limit or the indeterminate sentinel
/// - `side`           : direction of approach
/// - `point`          : target point `x0`
/// - `step`           : step `h`
/// - `left`           : `f(x0 - h)` if sampled
/// - `right`          : `f(x0 + h)` if sampled
/// - `gap`            : `|left - right|`, two-sided only
/// - `tolerance`      : agreement band `100 * h`, two-sided only
/// - `evaluations`    : calls to `f` (1 one-sided, 2 two-sided)
/// - `algorithm_name` : algorithm name (e.g. `"two_sided"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LimitReport {
    pub estimate       : LimitEstimate,
    pub side           : Side,
    pub point          : f64,
    pub step           : f64,
    pub left           : Option<f64>,
    pub right          : Option<f64>,
    pub gap            : Option<f64>,
    pub tolerance      : Option<f64>,
    pub evaluations    : usize,
    pub algorithm_name : &'static str,
}

impl LimitReport {
    pub(crate) fn new(side: Side, point: f64, step: f64) -> Self {
        Self {
            estimate       : LimitEstimate::Indeterminate,
            side,
            point,
            step,
            left           : None,
            right          : None,
            gap            : None,
            tolerance      : None,
            evaluations    : 0,
            algorithm_name : Algorithm::from(side).algorithm_name(),
        }
    }
}
