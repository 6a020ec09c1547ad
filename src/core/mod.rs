//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! error handling, configuration, server lifecycle management, transport
//! layer abstractions, and the operator debug surface.

pub mod config;
#[cfg(feature = "http")]
pub mod debug;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
#[cfg(feature = "http")]
pub use debug::DebugServer;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
