//! Static prompt asking for the robot's name and surroundings.

use async_trait::async_trait;

use eyesbot_protocols::error::CapabilityError;
use eyesbot_protocols::{Prompt, PromptDefinition, PromptMessage};

const ROBOT_INFO_TEXT: &str = "Could you get the robot's name and describe their surroundings";

pub struct RobotInfoPrompt {
    definition: PromptDefinition,
}

impl RobotInfoPrompt {
    pub fn new() -> Self {
        Self {
            definition: PromptDefinition::new("get_robot_info")
                .with_description("Get information about robot"),
        }
    }
}

impl Default for RobotInfoPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for RobotInfoPrompt {
    fn definition(&self) -> &PromptDefinition {
        &self.definition
    }

    async fn render(
        &self,
        _arguments: serde_json::Value,
    ) -> Result<Vec<PromptMessage>, CapabilityError> {
        Ok(vec![PromptMessage::user(ROBOT_INFO_TEXT)])
    }
}
