//! Threshold check over the search hit count
//!
//! Turns a [`ProbeConfig`] into a single [`Verdict`]: runs the search under a
//! deadline and compares the hit count with the configured threshold.

pub mod config;
pub mod evaluator;
pub mod runner;
pub mod status;

pub use config::{CompareOperator, ConfigError, ProbeConfig, MAX_TIME_PERIOD_MINUTES};
pub use evaluator::evaluate;
pub use runner::{run_check, supervise};
pub use status::{Status, Verdict};
