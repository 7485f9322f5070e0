//! Robot name tool.

use std::sync::Arc;

use async_trait::async_trait;

use eyesbot_bridge::RobotBridge;
use eyesbot_protocols::error::CapabilityError;
use eyesbot_protocols::{Tool, ToolDefinition, ToolResult};

/// Returns the robot's name, or `""` when the robot cannot be reached.
pub struct RobotNameTool {
    definition: ToolDefinition,
    bridge: Arc<RobotBridge>,
}

impl RobotNameTool {
    pub fn new(bridge: Arc<RobotBridge>) -> Self {
        Self {
            definition: ToolDefinition::new("robot_name", "Get the name of the robot"),
            bridge,
        }
    }
}

#[async_trait]
impl Tool for RobotNameTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, CapabilityError> {
        let name = self
            .bridge
            .robot_name()
            .await
            .map_err(|e| CapabilityError::Configuration(e.to_string()))?;
        Ok(ToolResult::success(name))
    }
}
