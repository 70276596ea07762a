// The host module adapts the core document logic to an agent host: tool
// schemas, argument parsing, and the MCP server.

#[path = "tool_catalog.rs"]
pub mod tool_catalog;

#[path = "docs_tools.rs"]
pub mod docs_tools;

#[path = "mcp_server.rs"]
pub mod mcp_server;

pub use docs_tools::DocsToolHandler;
