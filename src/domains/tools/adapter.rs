//! REST call adapter.
//!
//! Turns one configured tool invocation into one outbound HTTP request:
//! substitute the query value into the URL template, issue the request with
//! the configured verb, return the body text. No retries, no caching, no
//! explicit timeout beyond the client defaults.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::error::ToolError;
use crate::core::config::{HttpMethod, QUERY_PLACEHOLDER};

/// Adapter around a shared HTTP client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone, Default)]
pub struct RestAdapter {
    client: Client,
}

impl RestAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Substitute `query` into the template's `{query}` placeholder and
    /// parse the result.
    ///
    /// The value is percent-encoded first, so reserved characters cannot
    /// alter the URL structure: a space becomes `%20`, `#` becomes `%23`
    /// instead of starting a fragment, `&` becomes `%26` instead of
    /// splitting the query.
    pub fn expand_url(template: &str, query: &str) -> Result<Url, ToolError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        let raw = template.replace(QUERY_PLACEHOLDER, &encoded);
        Ok(Url::parse(&raw)?)
    }

    /// Perform one outbound call and return the response body as text.
    ///
    /// Any network failure or non-2xx status surfaces as a
    /// [`ToolError::Remote`].
    pub async fn execute(
        &self,
        method: HttpMethod,
        template: &str,
        query: &str,
    ) -> Result<String, ToolError> {
        let url = Self::expand_url(template, query)?;
        debug!(%method, %url, "issuing outbound request");

        let response = self
            .client
            .request(method.into(), url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_url_substitutes_placeholder() {
        let url =
            RestAdapter::expand_url("https://api.example.com/search?q={query}", "rust").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search?q=rust");
    }

    #[test]
    fn test_expand_url_percent_encodes_spaces() {
        let url = RestAdapter::expand_url(
            "https://api.example.com/search?q={query}",
            "rust ownership",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/search?q=rust%20ownership"
        );
    }

    #[test]
    fn test_expand_url_hash_stays_in_query() {
        // An unencoded '#' would start a fragment and truncate the query.
        let url = RestAdapter::expand_url(
            "https://api.example.com/search?q={query}",
            "c# tutorial",
        )
        .unwrap();
        assert_eq!(url.query(), Some("q=c%23%20tutorial"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_expand_url_ampersand_does_not_split_query() {
        let url = RestAdapter::expand_url(
            "https://api.example.com/search?q={query}",
            "fish & chips",
        )
        .unwrap();
        assert_eq!(url.query(), Some("q=fish%20%26%20chips"));
    }

    #[test]
    fn test_expand_url_in_path_segment() {
        let url = RestAdapter::expand_url("https://api.example.com/search/{query}", "rust").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search/rust");
    }

    #[test]
    fn test_expand_url_empty_query() {
        // A missing "query" argument substitutes the empty string upstream.
        let url = RestAdapter::expand_url("https://api.example.com/search?q={query}", "").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search?q=");
    }

    #[test]
    fn test_expand_url_rejects_garbage_template() {
        assert!(RestAdapter::expand_url("not a url {query}", "rust").is_err());
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_execute_get() {
        let adapter = RestAdapter::new();
        let body = adapter
            .execute(HttpMethod::Get, "https://httpbin.org/get?q={query}", "rust")
            .await
            .unwrap();
        assert!(body.contains("\"q\": \"rust\""));
    }

    #[ignore]
    #[tokio::test]
    async fn test_execute_non_2xx_is_error() {
        let adapter = RestAdapter::new();
        let result = adapter
            .execute(HttpMethod::Get, "https://httpbin.org/status/{query}", "500")
            .await;
        assert!(matches!(result, Err(ToolError::Remote(_))));
    }
}
