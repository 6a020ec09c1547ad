//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Unlike a server with hand-written tools, the ToolRouter here is
//! built entirely from configuration in `domains/tools/router.rs`: adding a
//! tool means adding an entry to the tools file, not touching this code.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, build_tool_router};

/// The main MCP server handler.
///
/// Holds the immutable configuration, the shared dispatcher, and the tool
/// router built once at construction. The registered tool set is fixed for
/// the process lifetime.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared invocation dispatcher.
    dispatcher: ToolDispatcher,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let dispatcher = ToolDispatcher::new(config.clone());

        Self {
            tool_router: build_tool_router(&config, dispatcher.clone()),
            dispatcher,
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared dispatcher.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all advertised tools as wire-format JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let args = arguments.as_object().cloned().unwrap_or_default();
        match self.dispatcher.invoke(name, &args).await {
            Ok(result) => Ok(serde_json::json!({
                "content": result.content,
                "isError": result.is_error.unwrap_or(false)
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Exposes {} configured REST search endpoint(s) as tools. \
                 Every tool accepts a single required string argument 'query'.",
                self.config.search.tools().len()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
