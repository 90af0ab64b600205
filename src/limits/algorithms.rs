//! Limit algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, one variant per approach, along with the
//! fixed agreement heuristic [`TOLERANCE_FACTOR`] used by two-sided limits.

use super::side::Side;


/// Two-sided estimates agree when `|f(x0 - h) - f(x0 + h)| < TOLERANCE_FACTOR * h`.
///
/// Fixed heuristic; scales with the step and not with `|f|`.
pub const TOLERANCE_FACTOR: f64 = 100.0;


/// Width of the two-sided agreement band for step `h`.
#[inline]
pub fn agreement_tolerance(h: f64) -> f64 {
    h * TOLERANCE_FACTOR
}


/// Limit algorithm variants.
/// - [`Algorithm::OneSidedLeft`]  : single sample at `x0 - h`
/// - [`Algorithm::OneSidedRight`] : single sample at `x0 + h`
/// - [`Algorithm::TwoSided`]      : both samples, midpoint if they agree
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    OneSidedLeft,
    OneSidedRight,
    TwoSided,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::OneSidedLeft  => "one_sided_left",
            Algorithm::OneSidedRight => "one_sided_right",
            Algorithm::TwoSided      => "two_sided",
        }
    }
}

impl From<Side> for Algorithm {
    fn from(side: Side) -> Self {
        match side {
            Side::Left  => Algorithm::OneSidedLeft,
            Side::Right => Algorithm::OneSidedRight,
            Side::Both  => Algorithm::TwoSided,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
