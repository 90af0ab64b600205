//! Defines the [`DerivativeReport`] struct returned by all
//! differentiation algorithms.

use super::algorithms::Algorithm;


/// Final report returned by all differentiation algorithms.
///
/// [`DerivativeReport`]
/// - `derivative`     : estimated `order`-th derivative at `point`
/// - `order`          : derivative order
/// - `point`          : evaluation point `x0`
/// - `step`           : step `h` used at every recursion level
/// - `evaluations`    : total calls to `f`, always `2^order`
/// - `algorithm_name` : algorithm name (e.g. `"central_difference"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DerivativeReport {
    pub derivative     : f64,
    pub order          : usize,
    pub point          : f64,
    pub step           : f64,
    pub evaluations    : usize,
    pub algorithm_name : &'static str,
}

impl DerivativeReport {
    pub(crate) fn new(algorithm: Algorithm, point: f64, step: f64, order: usize) -> Self {
        Self {
            derivative     : f64::NAN,
            order,
            point,
            step,
            evaluations    : 0,
            algorithm_name : algorithm.algorithm_name(),
        }
    }
}
