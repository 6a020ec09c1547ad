//! Tool invocation dispatcher.
//!
//! The one generic dispatch path shared by every configured tool and by
//! every surface (protocol callbacks and the debug endpoint): resolve the
//! tool by name, pull the `query` argument, run the REST adapter, wrap the
//! body in the text content envelope.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{info, warn};

use super::adapter::RestAdapter;
use super::error::ToolError;
use crate::core::config::Config;

/// Dispatches invocations against the immutable tool table.
///
/// Clones share the configuration and the adapter's connection pool, so one
/// dispatcher can serve the protocol router and the debug surface alike.
#[derive(Clone)]
pub struct ToolDispatcher {
    config: Arc<Config>,
    adapter: RestAdapter,
}

impl ToolDispatcher {
    /// Create a dispatcher over the loaded configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            adapter: RestAdapter::new(),
        }
    }

    /// Invoke a configured tool with a raw argument map.
    ///
    /// An unknown name fails with [`ToolError::NotFound`] before any
    /// outbound call is made. On success the response body is wrapped as
    /// `{content: [{type: "text", text: <body>}]}`.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: &JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self.config.search.find(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        let query = query_argument(arguments);
        info!(tool = %name, method = %tool.method, "invoking tool");

        let body = self.adapter.execute(tool.method, &tool.url, &query).await?;
        Ok(CallToolResult::success(vec![Content::text(body)]))
    }
}

/// Extract the query value from the argument map.
///
/// Only the `query` key is read; all other entries are ignored, not
/// validated. A missing or null value substitutes the empty string, any
/// other non-string value its display form.
fn query_argument(arguments: &JsonObject) -> String {
    match arguments.get("query") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{HttpMethod, SearchConfig, ToolConfig};
    use serde_json::json;

    fn dispatcher_with_tools(tools: Vec<ToolConfig>) -> ToolDispatcher {
        let mut config = Config::default();
        config.search = SearchConfig { tools };
        ToolDispatcher::new(Arc::new(config))
    }

    fn web_search() -> ToolConfig {
        ToolConfig {
            name: "web-search".to_string(),
            description: "Search the web".to_string(),
            method: HttpMethod::Get,
            url: "https://api.example.com/search?q={query}".to_string(),
        }
    }

    #[test]
    fn test_query_argument_string() {
        let args = json!({"query": "rust ownership"});
        assert_eq!(
            query_argument(args.as_object().unwrap()),
            "rust ownership"
        );
    }

    #[test]
    fn test_query_argument_missing_is_empty() {
        let args = json!({});
        assert_eq!(query_argument(args.as_object().unwrap()), "");
    }

    #[test]
    fn test_query_argument_null_is_empty() {
        let args = json!({"query": null});
        assert_eq!(query_argument(args.as_object().unwrap()), "");
    }

    #[test]
    fn test_query_argument_number_uses_display_form() {
        let args = json!({"query": 42});
        assert_eq!(query_argument(args.as_object().unwrap()), "42");
    }

    #[test]
    fn test_query_argument_ignores_extra_keys() {
        let args = json!({"query": "rust", "page": 3, "lang": "en"});
        assert_eq!(query_argument(args.as_object().unwrap()), "rust");
    }

    #[test]
    fn test_invoke_unknown_tool_makes_no_call() {
        // Resolution happens before the adapter runs, so this must fail
        // immediately with no network involved.
        let dispatcher = dispatcher_with_tools(vec![web_search()]);
        let args = JsonObject::new();
        let result = tokio_test::block_on(dispatcher.invoke("nonexistent", &args));
        match result {
            Err(ToolError::NotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invoke_unknown_tool_on_empty_table() {
        let dispatcher = dispatcher_with_tools(vec![]);
        let args = JsonObject::new();
        let result = tokio_test::block_on(dispatcher.invoke("web-search", &args));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    /// Serve exactly one canned 200 response on an ephemeral local port,
    /// returning the bound address and a handle resolving to the request
    /// head the client sent.
    async fn one_shot_http_server(
        body: &'static str,
    ) -> (std::net::SocketAddr, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap();
            let head = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            head
        });

        (addr, handle)
    }

    fn local_tool(name: &str, method: HttpMethod, addr: std::net::SocketAddr) -> ToolConfig {
        ToolConfig {
            name: name.to_string(),
            description: format!("{name} description"),
            method,
            url: format!("http://{addr}/search?q={{query}}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_wraps_body_in_text_envelope() {
        let (addr, request_head) = one_shot_http_server("3 results").await;
        let dispatcher =
            dispatcher_with_tools(vec![local_tool("web-search", HttpMethod::Get, addr)]);

        let args = json!({"query": "rust ownership"});
        let result = dispatcher
            .invoke("web-search", args.as_object().unwrap())
            .await
            .unwrap();

        // One call, configured method, substituted and encoded URL.
        let head = request_head.await.unwrap();
        assert!(
            head.starts_with("GET /search?q=rust%20ownership HTTP/1.1"),
            "unexpected request head: {head}"
        );

        // Body wrapped as {content: [{type: "text", text: <body>}]}.
        assert_eq!(result.is_error, Some(false));
        let envelope = serde_json::to_value(&result.content).unwrap();
        assert_eq!(envelope, json!([{"type": "text", "text": "3 results"}]));
    }

    #[tokio::test]
    async fn test_invoke_uses_configured_method() {
        let (addr, request_head) = one_shot_http_server("created").await;
        let dispatcher =
            dispatcher_with_tools(vec![local_tool("submit-search", HttpMethod::Post, addr)]);

        let args = json!({"query": "rust"});
        dispatcher
            .invoke("submit-search", args.as_object().unwrap())
            .await
            .unwrap();

        let head = request_head.await.unwrap();
        assert!(
            head.starts_with("POST /search?q=rust HTTP/1.1"),
            "unexpected request head: {head}"
        );
    }
}
