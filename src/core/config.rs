//! Configuration management for the MCP server.
//!
//! Scalar settings (server name, log level, transport, debug surface) come
//! from environment variables with the `MCP_` prefix. The tool table itself
//! is list-shaped, so it is loaded from a JSON file pointed to by
//! `MCP_TOOLS_FILE` (default: `tools.json`).
//!
//! All validation happens here, at load time. A malformed tool entry is a
//! fatal startup error, never a per-request one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;
use url::Url;

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::tools::descriptor;

/// Placeholder consumed when substituting the query value into a tool's
/// URL template. Each template must contain it exactly once.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Default path of the tools file when `MCP_TOOLS_FILE` is unset.
pub const DEFAULT_TOOLS_FILE: &str = "tools.json";

/// Main configuration structure for the MCP server.
///
/// Immutable after [`Config::load`] returns; shared read-only across all
/// request-handling paths via `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Debug/inspection surface configuration.
    pub debug: DebugConfig,

    /// The configured search tools.
    pub search: SearchConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the optional `/debug` inspection surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Whether the debug HTTP surface is served at all.
    pub enabled: bool,

    /// Host address the debug listener binds to.
    pub host: String,

    /// Port the debug listener binds to.
    pub port: u16,
}

/// The ordered, read-only table of configured tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tool entries in the order the operator declared them.
    pub tools: Vec<ToolConfig>,
}

/// One externally configured tool: a named REST endpoint exposed to MCP
/// clients with a fixed single-`query` input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Unique tool identifier advertised to clients.
    pub name: String,

    /// Human-readable description advertised to clients.
    pub description: String,

    /// HTTP verb used for the outbound call.
    pub method: HttpMethod,

    /// URL template containing exactly one `{query}` placeholder.
    pub url: String,
}

/// The HTTP verbs a tool may be configured with.
///
/// Any other verb in the tools file fails deserialization, which aborts
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// The verb in its wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl SearchConfig {
    /// All tool entries, in configured order.
    pub fn tools(&self) -> &[ToolConfig] {
        &self.tools
    }

    /// Look up a tool by its unique name.
    pub fn find(&self, name: &str) -> Option<&ToolConfig> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// The configured tool names, in order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Parse a tools file: `{"tools": [{name, description, method, url}, ...]}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read tools file {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::config(format!("malformed tools file {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every entry, failing fast on the first problem.
    ///
    /// Checks: non-empty name and description, unique names, exactly one
    /// `{query}` placeholder, a URL that parses once the placeholder is
    /// substituted, and a descriptor schema that serializes.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                return Err(Error::config("tool entry with empty name"));
            }
            if tool.description.trim().is_empty() {
                return Err(Error::config(format!(
                    "tool '{}' has an empty description",
                    tool.name
                )));
            }
            if !seen.insert(tool.name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate tool name: {}",
                    tool.name
                )));
            }
            let placeholders = tool.url.matches(QUERY_PLACEHOLDER).count();
            if placeholders != 1 {
                return Err(Error::config(format!(
                    "tool '{}' URL must contain exactly one {} placeholder, found {}",
                    tool.name, QUERY_PLACEHOLDER, placeholders
                )));
            }
            let probe = tool.url.replace(QUERY_PLACEHOLDER, "probe");
            Url::parse(&probe).map_err(|e| {
                Error::config(format!("tool '{}' has an invalid URL template: {}", tool.name, e))
            })?;
            // A descriptor that cannot be serialized must abort startup for
            // all tools, not be skipped per-tool.
            serde_json::to_string(&descriptor::build(tool)).map_err(|e| {
                Error::config(format!(
                    "cannot serialize input schema for tool '{}': {}",
                    tool.name, e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "search-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            debug: DebugConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "127.0.0.1".to_string(),
            port: 8081,
        }
    }
}

impl Config {
    /// Load configuration from the environment and the tools file.
    ///
    /// Returns an error for any malformed tool entry; the caller must treat
    /// that as fatal and refuse to serve.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(enabled) = std::env::var("MCP_DEBUG") {
            config.debug.enabled = enabled == "1" || enabled.eq_ignore_ascii_case("true");
        }
        if let Ok(host) = std::env::var("MCP_DEBUG_HOST") {
            config.debug.host = host;
        }
        if let Ok(port) = std::env::var("MCP_DEBUG_PORT") {
            config.debug.port = port
                .parse()
                .map_err(|_| Error::config(format!("invalid MCP_DEBUG_PORT: {port}")))?;
        }

        let tools_file =
            std::env::var("MCP_TOOLS_FILE").unwrap_or_else(|_| DEFAULT_TOOLS_FILE.to_string());
        config.search = SearchConfig::from_file(&tools_file)?;
        info!(
            "Loaded {} tool(s) from {}",
            config.search.tools().len(),
            tools_file
        );

        Ok(config)
    }
}
