//! Elasticsearch count query
//!
//! Renders the search body, posts it to today's index and reads back the
//! total hit count.

pub mod client;
pub mod response;
pub mod template;

pub use client::{search_url, RequestError, SearchClient};
pub use response::{parse_hit_count, ParseError, SearchResponse};
pub use template::{render_query, TemplateError, SEARCH_QUERY_TEMPLATE};

use crate::check::ProbeConfig;

/// Render, send and parse a single count query.
///
/// `time_from_secs` is the lower bound of the lookback window in epoch
/// seconds. The index date is taken from the local clock at call time.
pub async fn count_hits(
    client: &SearchClient,
    config: &ProbeConfig,
    time_from_secs: i64,
) -> Result<i64, SearchError> {
    count_hits_with(client, config, SEARCH_QUERY_TEMPLATE, time_from_secs).await
}

/// [`count_hits`] with a caller-supplied request body template
pub(crate) async fn count_hits_with(
    client: &SearchClient,
    config: &ProbeConfig,
    template: &str,
    time_from_secs: i64,
) -> Result<i64, SearchError> {
    let body = render_query(template, &config.escaped_query(), time_from_secs)?;

    let today = chrono::Local::now().date_naive();
    let url = search_url(&config.url, &config.index_pattern, today);

    let data = client.post(&url, body).await?;
    let count = parse_hit_count(&data)?;

    tracing::debug!(url = %url, count, "Search completed");
    Ok(count)
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
