//! Shared step configuration.
//!
//! Provides [`CommonCfg`] holding the finite-difference step `h`, along with
//! the checks every estimator runs on its inputs.
//!
//! [`CommonCfg`] — universal fields
//! └ `step` : distance from `x0` at which `f` is sampled
//!
//! [`CommonCfg::new`] initializes the step to [`DEFAULT_STEP`].

use super::errors::ArgumentError;


pub const DEFAULT_STEP: f64 = 1e-6;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    step: f64,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { step: DEFAULT_STEP }
    }

    // getters
    pub fn step(&self) -> f64 { self.step }

    // setters (internal)
    pub(crate) fn with_step(&mut self, v: f64) { self.step = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


/// `h` must be finite and strictly positive.
#[inline]
pub(crate) fn validate_step(h: f64) -> Result<f64, ArgumentError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(ArgumentError::InvalidStep { got: h });
    }
    Ok(h)
}

/// `x0` must be finite.
#[inline]
pub(crate) fn validate_point(x0: f64) -> Result<f64, ArgumentError> {
    if !x0.is_finite() {
        return Err(ArgumentError::InvalidPoint { got: x0 });
    }
    Ok(x0)
}


macro_rules! impl_step_cfg {
    ($cfg:ty, $err:ty) => {
        impl $cfg {
            pub fn set_step(mut self, v: f64) -> Result<Self, $err> {
                let h = $crate::common::step::validate_step(v)?;
                self.common.with_step(h);
                Ok(self)
            }

            pub fn step(&self) -> f64 { self.common.step() }
        }
    };
}
pub(crate) use impl_step_cfg;
