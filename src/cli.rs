use clap::Parser;

use crate::check::{
    run_check, CompareOperator, ConfigError, ProbeConfig, Verdict, MAX_TIME_PERIOD_MINUTES,
};

/// Count Elasticsearch log entries matching a query in the last few minutes
/// and compare the count against a threshold.
///
/// Prints one Nagios-style status line and exits with the matching code
/// (0 OK, 2 CRITICAL, 3 UNKNOWN).
#[derive(Parser, Debug)]
#[command(name = "check-es-logs-count", version = "0.10")]
pub struct CliArgs {
    /// Elasticsearch URL
    #[arg(short = 'u', long, default_value = "http://localhost:9200")]
    pub url: String,

    /// Timeout for the search in seconds
    #[arg(long, default_value_t = 20)]
    pub timeout: u64,

    /// Check the last N minutes until now
    #[arg(
        short = 't',
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(..=MAX_TIME_PERIOD_MINUTES)
    )]
    pub time_period: u64,

    /// Index pattern, e.g. logstash-mediawiki; today's date is appended
    #[arg(short = 'i', long, default_value = "logstash-*")]
    pub index_pattern: String,

    /// Elasticsearch query string
    #[arg(short = 'q', long, default_value = "*", allow_hyphen_values = true)]
    pub query: String,

    /// Threshold for the log entry count
    #[arg(short = 'T', long, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Operator to compare the count with the threshold, 'lt' or 'gt'
    #[arg(short = 'o', long, default_value = "gt")]
    pub compare_operator: String,
}

impl CliArgs {
    /// Validate the flags into a probe configuration
    pub fn into_config(self) -> Result<ProbeConfig, ConfigError> {
        let operator: CompareOperator = self.compare_operator.parse()?;

        Ok(ProbeConfig::new(self.threshold, operator)?
            .with_url(self.url)
            .with_timeout(std::time::Duration::from_secs(self.timeout))
            .with_time_period(self.time_period)
            .with_index_pattern(self.index_pattern)
            .with_query(self.query))
    }
}

/// Validate `args` and run the probe. Invalid flags are reported as UNKNOWN
/// without touching the network.
pub async fn run(args: CliArgs) -> Verdict {
    match args.into_config() {
        Ok(config) => {
            tracing::debug!(
                url = %config.url,
                index_pattern = %config.index_pattern,
                threshold = config.threshold,
                operator = %config.operator,
                "Starting probe"
            );
            run_check(config).await
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Invalid configuration");
            Verdict::unknown(e.to_string())
        }
    }
}

/// UNKNOWN verdict for a command line clap could not parse.
///
/// Keeps clap's error text on one line, without the usage hint.
pub fn usage_error_verdict(err: &clap::Error) -> Verdict {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:") && !line.starts_with("For more information"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Verdict::unknown(message.trim_start_matches("error: "))
}
