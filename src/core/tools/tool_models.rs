use serde::Serialize;
use std::collections::HashMap;

/// A tool the agent host can call: name, description and a JSON Schema for
/// its arguments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub parameters: ToolParameters,
}

/// JSON Schema for tool parameters.
#[derive(Debug, Clone, Serialize)]
pub struct ToolParameters {
    /// Always "object" for tool parameters.
    #[serde(rename = "type")]
    pub param_type: String,

    pub properties: HashMap<String, PropertyDef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// Schema for a single property/parameter.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDef {
    /// JSON Schema type: "string", "number", "integer", "boolean", "object"
    #[serde(rename = "type")]
    pub prop_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// For enum types, the list of allowed values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Nested properties when `prop_type` is "object".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertyDef>>,
}

impl PropertyDef {
    pub fn new(prop_type: &str, description: &str) -> Self {
        Self {
            prop_type: prop_type.to_string(),
            description: Some(description.to_string()),
            enum_values: None,
            properties: None,
        }
    }

    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_properties(mut self, properties: HashMap<String, PropertyDef>) -> Self {
        self.properties = Some(properties);
        self
    }
}
