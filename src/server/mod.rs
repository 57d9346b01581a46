//! MCP server over stdio.
//!
//! Implements `rmcp::ServerHandler` by hand: the tool list comes from the
//! [`ToolCatalog`](crate::tools::ToolCatalog) rather than from macros so the
//! annotations stay tri-state.

mod instructions;

pub use instructions::INSTRUCTIONS;

use crate::core::executor::Executor;
use crate::resources;
use crate::tools::Dispatcher;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListResourceTemplatesResult,
    ListToolsResult, PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam,
    ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ErrorData as McpError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct ZaiaServer {
    dispatcher: Dispatcher,
}

impl ZaiaServer {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self {
            dispatcher: Dispatcher::new(executor),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        self.dispatcher.catalog().to_tools()
    }

    /// Run a tool. Only an unknown name is a protocol error.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancel: &CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        match self.dispatcher.call(name, arguments, cancel).await {
            Some(response) => Ok(response.into()),
            None => {
                tracing::warn!(tool = name, "call to unknown tool");
                Err(McpError::invalid_params(
                    format!("unknown tool: {name}"),
                    None,
                ))
            }
        }
    }

    pub async fn read(
        &self,
        uri: &str,
        cancel: &CancellationToken,
    ) -> Result<ReadResourceResult, McpError> {
        let document =
            resources::read_doc(self.dispatcher.executor().as_ref(), uri, cancel).await?;
        Ok(ReadResourceResult {
            contents: vec![resources::to_contents(uri, document)],
        })
    }
}

impl rmcp::ServerHandler for ZaiaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments, &context.ct)
            .await
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        let template = resources::docs_template()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(ListResourceTemplatesResult::with_all_items(vec![template]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri, &context.ct).await
    }
}

/// Serve MCP on stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: ZaiaServer) -> crate::Result<()> {
    tracing::info!(tools = server.dispatcher.catalog().len(), "serving MCP over stdio");
    let running = rmcp::serve_server(server, rmcp::transport::stdio()).await?;
    let reason = running.waiting().await?;
    tracing::info!(?reason, "MCP session ended");
    Ok(())
}
