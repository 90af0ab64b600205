pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub use config::DerivativeCfg;
pub use errors::DerivativeError;
pub use report::DerivativeReport;

pub mod central;
