use async_trait::async_trait;
use serde_json::Value;

use super::tool_models::ToolDefinition;

/// Something that can execute named tool calls for the agent host.
///
/// Errors are plain strings because they are shown to the caller verbatim.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle_tool_call(&self, name: &str, args: &Value) -> Result<Value, String>;

    fn tool_definitions(&self) -> Vec<ToolDefinition>;

    fn supported_tools(&self) -> Vec<String> {
        self.tool_definitions()
            .into_iter()
            .map(|tool| tool.name)
            .collect()
    }
}
