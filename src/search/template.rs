//! Search request body rendering
//!
//! The request body is a fixed Elasticsearch query skeleton with two
//! placeholders: `{{ query }}` (the free-text query, already escaped for a
//! JSON string) and `{{ time_from }}` (lower `@timestamp` bound in epoch
//! milliseconds).

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Query skeleton sent to `_search`
pub const SEARCH_QUERY_TEMPLATE: &str = include_str!("query_template.json");

/// Values substituted into the template
#[derive(Debug, Serialize)]
struct QueryTemplateContext<'a> {
    query: &'a str,
    time_from: i64,
}

/// Render `template` with the escaped `query` and a lower time bound given
/// in whole seconds since the epoch.
pub fn render_query(
    template: &str,
    query: &str,
    time_from_secs: i64,
) -> Result<String, TemplateError> {
    let time_from = time_from_secs.checked_mul(1000).ok_or_else(|| {
        TemplateError(format!("time bound {}s is out of range", time_from_secs))
    })?;
    let ctx = QueryTemplateContext { query, time_from };

    build_env()
        .render_str(template, &ctx)
        .map_err(|e| TemplateError(e.to_string()))
}

/// The body is JSON, not HTML: no auto-escaping, and a missing placeholder
/// value is an error rather than an empty string.
fn build_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

#[derive(Debug, thiserror::Error)]
#[error("template error: {0}")]
pub struct TemplateError(pub String);
