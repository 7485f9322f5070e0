//! Surroundings description tool.

use std::sync::Arc;

use async_trait::async_trait;

use eyesbot_bridge::RobotBridge;
use eyesbot_protocols::error::CapabilityError;
use eyesbot_protocols::{Tool, ToolDefinition, ToolResult};

/// Returns the last surroundings the robot noted.
pub struct DescribeSurroundingsTool {
    definition: ToolDefinition,
    bridge: Arc<RobotBridge>,
}

impl DescribeSurroundingsTool {
    pub fn new(bridge: Arc<RobotBridge>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "describe_surroundings",
                "Get the last surroundings noted by robot",
            ),
            bridge,
        }
    }
}

#[async_trait]
impl Tool for DescribeSurroundingsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, CapabilityError> {
        let surroundings = self
            .bridge
            .surroundings()
            .await
            .map_err(|e| CapabilityError::Configuration(e.to_string()))?;
        Ok(ToolResult::success(surroundings))
    }
}
