//! Domains module containing business logic organized by bounded contexts.
//!
//! This server has a single bounded context: the tools domain, which maps
//! configured REST endpoints onto MCP tools.

pub mod tools;
