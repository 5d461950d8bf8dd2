//! check-es-logs-count: Elasticsearch log count probe
//!
//! A Nagios-style check that counts log entries matching a query string in
//! the last few minutes of today's daily index and compares the count with a
//! threshold.
//!
//! # Features
//!
//! - **Templated Query**: `query_string` search plus `@timestamp` range from a JSON asset
//! - **Daily Indices**: Targets `<index-pattern>-YYYY.MM.DD` for the local date
//! - **Threshold Direction**: `gt` (count must reach the threshold) or `lt` (stay under it)
//! - **Deadline**: The search races a timeout; a slow cluster reports UNKNOWN
//! - **Nagios Output**: One status line, exit code 0 / 2 / 3
//!
//! # Example
//!
//! ```no_run
//! use check_es_logs_count::check::{run_check, CompareOperator, ProbeConfig};
//!
//! # async fn probe() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig::new(100, CompareOperator::GreaterThan)?
//!     .with_url("http://localhost:9200")
//!     .with_query("level:ERROR");
//!
//! let verdict = run_check(config).await;
//! println!("{}", verdict);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod cli;
pub mod search;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use check::{run_check, CompareOperator, ConfigError, ProbeConfig, Status, Verdict};
pub use cli::CliArgs;
pub use search::{SearchClient, SearchError};
