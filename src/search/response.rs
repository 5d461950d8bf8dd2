//! `_search` response model
//!
//! Only `hits.total` is read; everything else in the response is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Hits,
}

#[derive(Debug, Deserialize)]
pub struct Hits {
    pub total: i64,
}

/// Extract the total hit count from a raw `_search` response body
pub fn parse_hit_count(body: &str) -> Result<i64, ParseError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode search response");
        ParseError
    })?;

    Ok(response.hits.total)
}

/// Fixed message; the decode cause is only logged at debug level
#[derive(Debug, thiserror::Error)]
#[error("JSON parse failed")]
pub struct ParseError;
