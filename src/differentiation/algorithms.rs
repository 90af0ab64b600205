//! Differentiation algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the supported
//! finite-difference schemes.

/// Finite-difference algorithm variants.
/// - [`Algorithm::CentralDifference`] symmetric two-point stencil, O(h²)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    CentralDifference,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::CentralDifference => "central_difference",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
