//! Search MCP Server Library
//!
//! This crate exposes a set of externally configured REST endpoints as MCP
//! tools. The operator declares tools (name, description, HTTP method, URL
//! template) in a JSON file; at startup each entry is advertised with a
//! fixed single-`query` input schema and bound to a callback that performs
//! the HTTP call and returns the response body as a text content envelope.
//!
//! # Architecture
//!
//! - **core**: Infrastructure - configuration, error handling, the main
//!   server handler, transports, and the optional `/debug` surface
//! - **domains::tools**: The config-to-tool mapping - descriptor builder,
//!   REST call adapter, invocation dispatcher, and router registration
//!
//! # Example
//!
//! ```rust,no_run
//! use search_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
