//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while dispatching a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool has no matching configuration entry.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The URL template did not produce a valid request URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The outbound call failed: network error, timeout, or a non-2xx
    /// response from the remote service.
    #[error("Remote call failed: {0}")]
    Remote(#[from] reqwest::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

/// Conversion used at the protocol edge: per-request failures become MCP
/// invocation errors for the calling agent.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match &err {
            ToolError::NotFound(_) => McpError::invalid_params(err.to_string(), None),
            ToolError::InvalidUrl(_) | ToolError::Remote(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
