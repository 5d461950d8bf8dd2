//! Threshold evaluation of a hit count

use super::config::{CompareOperator, ProbeConfig};
use super::status::Verdict;

/// Compare `count` against the configured threshold.
///
/// A count equal to the threshold is healthy for both operators.
pub fn evaluate(config: &ProbeConfig, count: i64) -> Verdict {
    let message = format!(
        "{} entries of '{}' ({:.2}%) found in the past {} minutes",
        count,
        config.query,
        percentage(count, config.threshold),
        config.time_period_minutes
    );

    if is_healthy(config.operator, count, config.threshold) {
        Verdict::ok(message)
    } else {
        Verdict::critical(message)
    }
}

fn is_healthy(operator: CompareOperator, count: i64, threshold: i64) -> bool {
    match operator {
        CompareOperator::GreaterThan => count >= threshold,
        CompareOperator::LessThan => count <= threshold,
    }
}

fn percentage(count: i64, threshold: i64) -> f64 {
    count as f64 / threshold as f64 * 100.0
}
