//! Direction of approach toward `x0`.

use std::str::FromStr;
use crate::common::errors::ArgumentError;


/// Side selector for [`crate::limits::numerical::limit`].
/// - [`Side::Left`]  : `x -> x0⁻`, samples `x0 - h`
/// - [`Side::Right`] : `x -> x0⁺`, samples `x0 + h`
/// - [`Side::Both`]  : samples both and requires agreement
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Left,
    Right,
    #[default]
    Both,
}

impl Side {
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left  => "left",
            Side::Right => "right",
            Side::Both  => "both",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact lowercase names only; `"Left"` or `" both"` are rejected.
impl FromStr for Side {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left"  => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "both"  => Ok(Side::Both),
            _       => Err(ArgumentError::InvalidSide { got: s.to_owned() }),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = ArgumentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
