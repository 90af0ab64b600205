use thiserror::Error;
use crate::common::errors::ArgumentError;


/// Limit estimation errors.
///
/// A two-sided disagreement is not an error; it is reported as
/// [`crate::limits::LimitEstimate::Indeterminate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
