// =============================================================================
// MCP SERVER
// =============================================================================
//
// Serves a `ToolHandler` to an agent host over MCP on stdin/stdout. `rmcp`
// owns the JSON-RPC framing and the handshake; this file only maps our tool
// definitions and results onto its model types.
//
// Tool failures are reported inside the result (`isError: true`) so the agent
// can read them; protocol errors stay with `rmcp`.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, JsonObject,
    ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;

use crate::core::tools::{ToolDefinition, ToolHandler};

pub const SERVER_NAME: &str = "google-docs-tools";

const INSTRUCTIONS: &str = "Google Docs tools. Pass a document ID or a full \
docs.google.com URL as document_id. Indexes are zero-based UTF-16 offsets as \
reported by get_document.";

fn to_mcp_tool(definition: ToolDefinition) -> Tool {
    let schema = match serde_json::to_value(&definition.parameters) {
        Ok(Value::Object(schema)) => schema,
        _ => JsonObject::new(),
    };
    Tool::new(definition.name, definition.description, Arc::new(schema))
}

/// `rmcp` server wrapping any tool handler.
pub struct DocsMcpServer<H> {
    handler: H,
}

impl<H: ToolHandler + 'static> DocsMcpServer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.handler
            .tool_definitions()
            .into_iter()
            .map(to_mcp_tool)
            .collect()
    }

    /// Runs one tool. Never fails at the protocol level.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let arguments = Value::Object(arguments.unwrap_or_default());
        match self.handler.handle_tool_call(name, &arguments).await {
            Ok(result) => {
                let text =
                    serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string());
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => CallToolResult::error(vec![Content::text(e)]),
        }
    }
}

impl<H: ToolHandler + 'static> ServerHandler for DocsMcpServer<H> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self.call(&request.name, request.arguments).await)
    }
}

/// Serves on stdin/stdout until the host closes the session.
pub async fn serve_stdio<H: ToolHandler + 'static>(handler: H) -> anyhow::Result<()> {
    let service = DocsMcpServer::new(handler)
        .serve(rmcp::transport::stdio())
        .await?;
    let reason = service.waiting().await?;
    tracing::info!("MCP session ended: {:?}", reason);
    Ok(())
}
