//! Numerical derivative and limit estimators.
//!
//! ┌ [`differentiation`] : nth-order central-difference derivatives
//! └ [`limits`]          : one- and two-sided numerical limits
//!
//! Both families evaluate a caller-supplied `FnMut(f64) -> f64` a fixed number
//! of times and keep no state between calls.

pub mod common;
pub mod differentiation;
pub mod limits;

pub use common::errors::ArgumentError;
pub use differentiation::central::{central_difference, derivative, try_derivative};
pub use limits::numerical::{limit, numerical_limit, try_limit};
