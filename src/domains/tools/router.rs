//! Tool Router - builds the rmcp ToolRouter from the loaded configuration.
//!
//! The original registration is one-shot: every configured tool gets one
//! dynamic route bound to the shared dispatcher, and the set never changes
//! for the process lifetime.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::descriptor;
use super::dispatcher::ToolDispatcher;
use crate::core::config::{Config, ToolConfig};

/// Build the tool router with one route per configured tool.
pub fn build_tool_router<S>(config: &Arc<Config>, dispatcher: ToolDispatcher) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for tool in config.search.tools() {
        router = router.with_route(create_route(tool, dispatcher.clone()));
    }
    router
}

/// Create the dynamic route for one configured tool: the advertised
/// descriptor plus a callback that forwards to the dispatcher.
fn create_route<S>(tool: &ToolConfig, dispatcher: ToolDispatcher) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(descriptor::build(tool), move |ctx: ToolCallContext<'_, S>| {
        let dispatcher = dispatcher.clone();
        let name = name.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            dispatcher
                .invoke(&name, &args)
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}
