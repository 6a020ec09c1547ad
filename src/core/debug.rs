//! Debug/inspection HTTP surface.
//!
//! A diagnostic endpoint for operators, enabled with `MCP_DEBUG=true` and
//! served on its own listener so it is available under every transport. It
//! reads the same configuration and dispatch path as the protocol surface;
//! nothing here is part of the protocol contract.
//!
//! Invocation failures (unknown tool, remote errors) are reported in-body
//! with `success: false` and HTTP 200. Only metadata lookups of unknown
//! tools return an HTTP error status.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use super::transport::{TransportError, TransportResult};
use crate::domains::tools::{ToolDispatcher, descriptor};

/// The debug surface: configuration plus a dispatcher sharing the same
/// immutable tool table as the protocol side.
#[derive(Clone)]
pub struct DebugServer {
    config: Arc<Config>,
    dispatcher: ToolDispatcher,
}

impl DebugServer {
    /// Create the debug surface over the loaded configuration and the
    /// protocol side's dispatcher, so both surfaces share one connection
    /// pool.
    pub fn new(config: Arc<Config>, dispatcher: ToolDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.debug.host, self.config.debug.port)
    }

    /// Build the axum router for the debug routes.
    pub fn router(self) -> Router {
        Router::new()
            .route("/debug/tools", get(list_tools))
            .route("/debug/tools/{tool_name}", get(tool_details))
            .route("/debug/execute/{tool_name}", post(execute_tool))
            .route("/debug/health", get(health))
            .route("/debug/config", get(dump_config))
            .with_state(self)
    }

    /// Serve the debug routes until shutdown.
    pub async fn run(self) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Debug surface listening on {}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// `GET /debug/tools` - all advertised descriptors with a count.
async fn list_tools(State(state): State<DebugServer>) -> (StatusCode, Json<serde_json::Value>) {
    let tools: Vec<_> = state
        .config
        .search
        .tools()
        .iter()
        .map(descriptor::build)
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "count": tools.len(), "tools": tools })),
    )
}

/// `GET /debug/tools/{tool_name}` - one tool's raw configuration.
async fn tool_details(
    State(state): State<DebugServer>,
    Path(tool_name): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.config.search.find(&tool_name) {
        Some(tool) => (
            StatusCode::OK,
            Json(json!({
                "name": tool.name,
                "description": tool.description,
                "method": tool.method,
                "url": tool.url,
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Tool not found: {tool_name}") })),
        ),
    }
}

/// `POST /debug/execute/{tool_name}` - invoke a tool with a raw argument map.
///
/// Always HTTP 200; failures are reported through the `success` flag.
async fn execute_tool(
    State(state): State<DebugServer>,
    Path(tool_name): Path<String>,
    Json(arguments): Json<rmcp::model::JsonObject>,
) -> (StatusCode, Json<serde_json::Value>) {
    let body = match state.dispatcher.invoke(&tool_name, &arguments).await {
        Ok(result) => json!({
            "success": true,
            "toolName": tool_name,
            "arguments": arguments,
            "result": { "content": result.content },
        }),
        Err(e) => {
            warn!("Debug invocation of '{}' failed: {}", tool_name, e);
            json!({ "success": false, "error": e.to_string() })
        }
    };

    (StatusCode::OK, Json(body))
}

/// `GET /debug/health` - process health with the registered tool names.
async fn health(State(state): State<DebugServer>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "UP",
            "toolsRegistered": state.config.search.tools().len(),
            "toolNames": state.config.search.tool_names(),
        })),
    )
}

/// `GET /debug/config` - dump the raw tool configuration list.
async fn dump_config(State(state): State<DebugServer>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "tools": state.config.search.tools() })),
    )
}
