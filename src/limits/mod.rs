pub mod algorithms;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod report;
pub mod side;
pub use config::LimitCfg;
pub use errors::LimitError;
pub use estimate::LimitEstimate;
pub use report::LimitReport;
pub use side::Side;

pub mod numerical;
