//! Tool descriptor builder.
//!
//! Every configured tool advertises the same fixed input schema: an object
//! with a single required string property `query`. Only the name and the
//! description vary between tools.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::json;

use crate::core::config::ToolConfig;

/// The fixed input schema shared by every configured tool:
/// `{type: "object", properties: {query: {type: "string", ...}}, required: ["query"]}`.
pub fn query_input_schema() -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert(
        "properties".to_string(),
        json!({
            "query": {
                "type": "string",
                "description": "Search query string"
            }
        }),
    );
    schema.insert("required".to_string(), json!(["query"]));
    Arc::new(schema)
}

/// Build the protocol descriptor for one configured tool.
///
/// Pure and deterministic; missing name/description are rejected at
/// configuration load time, never here.
pub fn build(config: &ToolConfig) -> Tool {
    Tool::new(
        config.name.clone(),
        config.description.clone(),
        query_input_schema(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::HttpMethod;
    use serde_json::json;

    fn tool_config(method: HttpMethod) -> ToolConfig {
        ToolConfig {
            name: "web-search".to_string(),
            description: "Search the web".to_string(),
            method,
            url: "https://api.example.com/search?q={query}".to_string(),
        }
    }

    #[test]
    fn test_schema_shape_is_fixed() {
        let schema = query_input_schema();
        let expected = json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                }
            },
            "required": ["query"]
        });
        assert_eq!(serde_json::Value::Object((*schema).clone()), expected);
    }

    #[test]
    fn test_build_varies_only_name_and_description() {
        // Method and URL must not leak into the descriptor.
        let get_tool = build(&tool_config(HttpMethod::Get));
        let post_tool = build(&tool_config(HttpMethod::Post));
        assert_eq!(get_tool.input_schema, post_tool.input_schema);
        assert_eq!(get_tool.name.as_ref(), "web-search");
        assert_eq!(get_tool.description.as_deref(), Some("Search the web"));
    }

    #[test]
    fn test_descriptor_serializes_to_wire_format() {
        let tool = build(&tool_config(HttpMethod::Get));
        let wire = serde_json::to_value(&tool).unwrap();
        assert_eq!(wire["name"], json!("web-search"));
        assert_eq!(wire["inputSchema"]["required"], json!(["query"]));
        assert_eq!(
            wire["inputSchema"]["properties"]["query"]["type"],
            json!("string")
        );
    }
}
