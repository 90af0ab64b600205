// shared helpers
pub mod errors;
pub mod step;
pub(crate) mod eval;
