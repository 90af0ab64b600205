use thiserror::Error;
use crate::common::errors::ArgumentError;


/// Derivative estimation errors.
///
/// Only argument validation can fail; a failing user function reports through
/// its own error type (see [`crate::differentiation::central::try_derivative`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivativeError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
