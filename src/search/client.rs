use chrono::NaiveDate;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// HTTP client for the Elasticsearch `_search` endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: reqwest::Client,
}

impl SearchClient {
    pub fn new() -> Result<Self, RequestError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| RequestError::Transport(error_chain(&e)))?;

        Ok(Self { http_client })
    }

    /// POST a JSON body and return the raw response text.
    ///
    /// Anything other than `200 OK` is an error carrying the status line.
    pub async fn post(&self, url: &str, body: String) -> Result<String, RequestError> {
        tracing::debug!(url = %url, bytes = body.len(), "Sending search request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RequestError::Transport(error_chain(&e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RequestError::Status(status.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| RequestError::Transport(error_chain(&e)))
    }
}

/// `<base>/<index_pattern>-<YYYY.MM.DD>/_search`
///
/// Indices are expected to carry a daily date suffix.
pub fn search_url(base_url: &str, index_pattern: &str, day: NaiveDate) -> String {
    format!(
        "{}/{}-{}/_search",
        base_url,
        index_pattern,
        day.format("%Y.%m.%d")
    )
}

/// Flatten an error and its sources into one line
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        messages.push(e.to_string());
        source = e.source();
    }
    messages.join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP response code: {0}")]
    Status(String),

    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, FakeElasticsearch, ScriptedReply};

    #[test]
    fn test_search_url() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            search_url("http://localhost:9200", "logstash-*", day),
            "http://localhost:9200/logstash-*-2024.03.07/_search"
        );
        assert_eq!(
            search_url("https://es.internal:443", "logstash-mediawiki", day),
            "https://es.internal:443/logstash-mediawiki-2024.03.07/_search"
        );
    }

    #[test]
    fn test_error_chain_joins_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(std::io::ErrorKind::Other, "inner"));
        assert_eq!(error_chain(&err), "outer, inner");
    }

    #[tokio::test]
    async fn test_post_returns_body() {
        let es = FakeElasticsearch::start(ScriptedReply::ok(r#"{"hits":{"total":3}}"#)).await;
        let client = SearchClient::new().unwrap();

        let url = format!("{}/logs-2024.01.01/_search", es.url());
        let body = client.post(&url, r#"{"size":0}"#.to_string()).await.unwrap();

        assert_eq!(body, r#"{"hits":{"total":3}}"#);
        let requests = es.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/logs-2024.01.01/_search");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(requests[0].body, r#"{"size":0}"#);
    }

    #[tokio::test]
    async fn test_non_200_is_error() {
        let es = FakeElasticsearch::start(ScriptedReply::status(500, "boom")).await;
        let client = SearchClient::new().unwrap();

        let err = client.post(&es.url(), "{}".to_string()).await.unwrap_err();
        assert!(matches!(err, RequestError::Status(_)));
        assert_eq!(err.to_string(), "HTTP response code: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_other_success_codes_rejected() {
        let es = FakeElasticsearch::start(ScriptedReply::status(201, "{}")).await;
        let client = SearchClient::new().unwrap();

        let err = client.post(&es.url(), "{}".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP response code: 201 Created");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let url = closed_port_url().await;
        let client = SearchClient::new().unwrap();

        let err = client.post(&url, "{}".to_string()).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
