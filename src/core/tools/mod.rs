pub mod tool_handler;
pub mod tool_models;

pub use tool_handler::ToolHandler;
pub use tool_models::{PropertyDef, ToolDefinition, ToolParameters};
