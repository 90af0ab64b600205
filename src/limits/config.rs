//! Limit configuration.
//!
//! [`LimitCfg`]
//! ├ `common` : [`CommonCfg`] holding the step `h` (default [`crate::common::step::DEFAULT_STEP`])
//! └ `side`   : direction of approach (default [`Side::Both`])

use crate::common::step::{impl_step_cfg, validate_step, CommonCfg};
use super::errors::LimitError;
use super::side::Side;


/// Limit configuration.
///
/// # Construction
/// - Use [`LimitCfg::new`] then optional setters.
/// - [`LimitCfg::set_side`]     : any [`Side`]
/// - [`LimitCfg::set_side_str`] : `"left"`, `"right"` or `"both"`
/// - [`LimitCfg::set_step`]     : `h` must be finite and > 0
#[derive(Debug, Copy, Clone)]
pub struct LimitCfg {
    common: CommonCfg,
    side: Side,
}
impl LimitCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            side: Side::default(),
        }
    }

    #[must_use]
    pub fn set_side(mut self, v: Side) -> Self {
        self.side = v;
        self
    }

    pub fn set_side_str(self, v: &str) -> Result<Self, LimitError> {
        let side: Side = v.parse()?;
        Ok(self.set_side(side))
    }

    pub fn side(&self) -> Side { self.side }

    pub(crate) fn validate(&self) -> Result<(f64, Side), LimitError> {
        let h = validate_step(self.common.step())?;
        Ok((h, self.side))
    }
}
impl Default for LimitCfg {
    fn default() -> Self { Self::new() }
}
impl_step_cfg!(LimitCfg, LimitError);
