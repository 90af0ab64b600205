//! Outcome of a limit estimate.

/// Either a numeric limit or the explicit no-limit sentinel.
///
/// [`LimitEstimate::Indeterminate`] is only produced for [`crate::limits::Side::Both`]
/// when the one-sided values disagree beyond the tolerance band. It is a
/// normal outcome, not an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LimitEstimate {
    Value(f64),
    Indeterminate,
}

impl LimitEstimate {
    /// `Some(v)` for [`LimitEstimate::Value`], `None` otherwise.
    pub fn value(&self) -> Option<f64> {
        match self {
            LimitEstimate::Value(v)      => Some(*v),
            LimitEstimate::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, LimitEstimate::Indeterminate)
    }
}

impl From<LimitEstimate> for Option<f64> {
    fn from(estimate: LimitEstimate) -> Self {
        estimate.value()
    }
}

impl std::fmt::Display for LimitEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitEstimate::Value(v)      => write!(f, "{v}"),
            LimitEstimate::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
