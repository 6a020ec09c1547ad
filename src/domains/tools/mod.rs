//! Tools domain module.
//!
//! Everything needed to turn the configured tool table into callable MCP
//! tools:
//!
//! - `descriptor.rs` - builds the fixed-schema protocol descriptor per tool
//! - `adapter.rs` - performs the outbound REST call
//! - `dispatcher.rs` - name resolution, argument extraction, envelope
//! - `router.rs` - one-shot registration of dynamic routes with rmcp
//! - `error.rs` - tool-specific error types
//!
//! Tools are not written in code here; the operator declares them in the
//! tools file and this module maps each entry onto the same dispatch path.

pub mod adapter;
pub mod descriptor;
pub mod dispatcher;
mod error;
pub mod router;

pub use adapter::RestAdapter;
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use router::build_tool_router;
