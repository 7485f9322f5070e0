//! Tool trait and its definition/result types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

/// Definition of a tool as advertised to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique name the caller invokes the tool by.
    pub name: String,

    /// Description of what the tool does.
    pub description: String,

    /// JSON Schema for the call arguments.
    pub input_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Create a definition for a tool that takes no arguments.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: empty_object_schema(),
        }
    }
}

fn empty_object_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {}
    })
}

/// Result of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Text output. Failures are reported as `Err(CapabilityError)`.
    pub content: String,
}

impl ToolResult {
    /// Create a successful result with text content.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Core trait for tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given arguments.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, CapabilityError>;

    /// Validate the arguments before execution.
    fn validate(&self, params: &serde_json::Value) -> Result<(), CapabilityError> {
        let schema = &self.definition().input_schema;
        if schema.get("type") == Some(&serde_json::json!("object"))
            && !(params.is_object() || params.is_null())
        {
            return Err(CapabilityError::InvalidParameters(
                "Arguments must be an object".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        definition: ToolDefinition,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, CapabilityError> {
            Ok(ToolResult::success(params.to_string()))
        }
    }

    fn echo() -> EchoTool {
        EchoTool {
            definition: ToolDefinition::new("echo", "Echo the arguments"),
        }
    }

    #[test]
    fn test_definition_default_schema() {
        let def = ToolDefinition::new("robot_name", "Get the name of the robot");
        assert_eq!(def.input_schema["type"], "object");
        assert!(def.input_schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_definition_serializes_camel_case() {
        let def = ToolDefinition::new("robot_name", "Get the name of the robot");
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["name"], "robot_name");
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }

    #[test]
    fn test_result_success() {
        let result = ToolResult::success("Rover");
        assert_eq!(result.content, "Rover");
    }

    #[test]
    fn test_result_success_may_be_empty() {
        let result = ToolResult::success("");
        assert!(result.content.is_empty());
    }

    #[test]
    fn test_validate_accepts_object_and_null() {
        let tool = echo();
        assert!(tool.validate(&serde_json::json!({})).is_ok());
        assert!(tool.validate(&serde_json::Value::Null).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let tool = echo();
        let err = tool.validate(&serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, CapabilityError::InvalidParameters(_)));
        assert!(tool.validate(&serde_json::json!("text")).is_err());
    }

    #[tokio::test]
    async fn test_execute() {
        let tool = echo();
        let result = tool.execute(serde_json::json!({"a": 1})).await.unwrap();
        assert_eq!(result.content, r#"{"a":1}"#);
    }
}
