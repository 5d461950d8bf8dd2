//! Probe execution under a deadline
//!
//! The search runs as a spawned task that reports exactly one outcome over a
//! oneshot channel. The caller waits for that outcome or the configured
//! timeout, whichever comes first.

use std::future::Future;

use tokio::sync::oneshot;

use super::config::ProbeConfig;
use super::evaluator::evaluate;
use super::status::Verdict;
use crate::search::{count_hits, SearchClient, SearchError};

/// Result reported by the search task
type Outcome = Result<i64, SearchError>;

/// Run the probe with a lookback window ending now
pub async fn run_check(config: ProbeConfig) -> Verdict {
    let client = match SearchClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create HTTP client");
            return Verdict::unknown(e.to_string());
        }
    };

    let time_from = config.lookback_start(chrono::Utc::now().timestamp());
    supervise(client, config, time_from).await
}

/// Race the search pipeline against `config.timeout`.
///
/// On timeout the search task is aborted and its result, if any, dropped.
pub async fn supervise(client: SearchClient, config: ProbeConfig, time_from_secs: i64) -> Verdict {
    let pipeline_config = config.clone();
    race_outcome(&config, async move {
        count_hits(&client, &pipeline_config, time_from_secs).await
    })
    .await
}

/// Spawn `pipeline` and turn whichever of its outcome or the deadline comes
/// first into a verdict
async fn race_outcome<F>(config: &ProbeConfig, pipeline: F) -> Verdict
where
    F: Future<Output = Outcome> + Send + 'static,
{
    let (outcome_tx, outcome_rx) = oneshot::channel::<Outcome>();

    let task = tokio::spawn(async move {
        let outcome = pipeline.await;
        // Receiver is gone once the deadline has passed
        let _ = outcome_tx.send(outcome);
    });

    tokio::select! {
        outcome = outcome_rx => match outcome {
            Ok(Ok(count)) => {
                let verdict = evaluate(config, count);
                tracing::debug!(count, status = %verdict.status, "Threshold evaluated");
                verdict
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %config.url, error = %e, "Search failed");
                Verdict::unknown(e.to_string())
            }
            Err(_) => {
                tracing::error!("Search task exited without reporting an outcome");
                Verdict::unknown("search task exited without reporting a result")
            }
        },
        _ = tokio::time::sleep(config.timeout) => {
            task.abort();
            tracing::warn!(
                url = %config.url,
                timeout_ms = config.timeout.as_millis() as u64,
                "Search timed out"
            );
            Verdict::unknown("connection timeout")
        }
    }
}
