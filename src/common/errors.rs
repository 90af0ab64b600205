//! Argument errors shared by every estimator.
//!
//! ┌ [`ArgumentError::InvalidStep`]  : step `h` non-finite or <= 0
//! ├ [`ArgumentError::InvalidOrder`] : derivative order < 1
//! ├ [`ArgumentError::InvalidSide`]  : unrecognized side selector
//! └ [`ArgumentError::InvalidPoint`] : evaluation point non-finite
//!
//! All of these are raised before the supplied function is evaluated.


use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("invalid step: h must be finite and > 0. got h={got}")]
    InvalidStep  { got: f64 },

    #[error("invalid order: must be >= 1. got order={got}")]
    InvalidOrder { got: usize },

    #[error("invalid side `{got}`: expected one of `left`, `right`, `both`")]
    InvalidSide  { got: String },

    #[error("invalid point: x0 must be finite. got x0={got}")]
    InvalidPoint { got: f64 },
}
