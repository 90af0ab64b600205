//! Derivative configuration.
//!
//! [`DerivativeCfg`]
//! ├ `common` : [`CommonCfg`] holding the step `h` (default [`crate::common::step::DEFAULT_STEP`])
//! └ `order`  : derivative order (default [`DEFAULT_ORDER`])

use crate::common::errors::ArgumentError;
use crate::common::step::{impl_step_cfg, validate_step, CommonCfg};
use super::errors::DerivativeError;


pub const DEFAULT_ORDER: usize = 1;


/// Derivative configuration.
///
/// # Construction
/// - Use [`DerivativeCfg::new`] then optional setters.
/// - [`DerivativeCfg::set_step`]  : `h` must be finite and > 0
/// - [`DerivativeCfg::set_order`] : `order` must be >= 1
#[derive(Debug, Copy, Clone)]
pub struct DerivativeCfg {
    common: CommonCfg,
    order: usize,
}
impl DerivativeCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            order: DEFAULT_ORDER,
        }
    }

    pub fn set_order(mut self, v: usize) -> Result<Self, DerivativeError> {
        if v < 1 {
            return Err(ArgumentError::InvalidOrder { got: v }.into());
        }
        self.order = v;
        Ok(self)
    }

    pub fn order(&self) -> usize { self.order }

    /// Re-checks every field; run at the start of each estimate.
    pub(crate) fn validate(&self) -> Result<(f64, usize), DerivativeError> {
        let h = validate_step(self.common.step())?;
        if self.order < 1 {
            return Err(ArgumentError::InvalidOrder { got: self.order }.into());
        }
        Ok((h, self.order))
    }
}
impl Default for DerivativeCfg {
    fn default() -> Self { Self::new() }
}
impl_step_cfg!(DerivativeCfg, DerivativeError);
