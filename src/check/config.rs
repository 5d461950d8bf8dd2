//! Probe configuration types

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Longest accepted lookback window: one hundred years
pub const MAX_TIME_PERIOD_MINUTES: u64 = 100 * 366 * 24 * 60;

/// Immutable settings for one probe invocation
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Elasticsearch base URL
    pub url: String,
    /// How long to wait for the search before reporting a timeout
    pub timeout: Duration,
    /// Lookback window in minutes
    pub time_period_minutes: u64,
    /// Index name prefix; today's date is appended
    pub index_pattern: String,
    /// Free-text query as given by the operator (unescaped)
    pub query: String,
    /// Hit count threshold, never zero
    pub threshold: i64,
    /// Direction of the threshold comparison
    pub operator: CompareOperator,
}

impl ProbeConfig {
    /// Create a config with the default connection settings.
    ///
    /// Fails if `threshold` is zero.
    pub fn new(threshold: i64, operator: CompareOperator) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        Ok(Self {
            url: "http://localhost:9200".to_string(),
            timeout: Duration::from_secs(20),
            time_period_minutes: 5,
            index_pattern: "logstash-*".to_string(),
            query: "*".to_string(),
            threshold,
            operator,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_time_period(mut self, minutes: u64) -> Self {
        self.time_period_minutes = minutes;
        self
    }

    pub fn with_index_pattern(mut self, index_pattern: impl Into<String>) -> Self {
        self.index_pattern = index_pattern.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Query with every `"` backslash-escaped, ready to sit inside a JSON string
    pub fn escaped_query(&self) -> String {
        self.query.replace('"', "\\\"")
    }

    /// Start of the lookback window in epoch seconds.
    ///
    /// Saturates instead of overflowing for absurdly long windows.
    pub fn lookback_start(&self, now_secs: i64) -> i64 {
        let minutes = i64::try_from(self.time_period_minutes).unwrap_or(i64::MAX);
        now_secs.saturating_sub(minutes.saturating_mul(60))
    }
}

/// How the hit count is compared against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    /// `gt`: healthy while count >= threshold
    GreaterThan,
    /// `lt`: healthy while count <= threshold
    LessThan,
}

impl CompareOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOperator::GreaterThan => "gt",
            CompareOperator::LessThan => "lt",
        }
    }
}

impl FromStr for CompareOperator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(CompareOperator::GreaterThan),
            "lt" => Ok(CompareOperator::LessThan),
            _ => Err(ConfigError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("compare-operator parameter should be 'lt' or 'gt', got '{0}'")]
    InvalidOperator(String),

    #[error("threshold cannot be equal to 0")]
    ZeroThreshold,
}
