//! Robot tools extension definition.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use eyesbot_bridge::RobotBridge;
use eyesbot_protocols::error::ExtensionError;
use eyesbot_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use eyesbot_protocols::types::Version;

use crate::prompts::RobotInfoPrompt;
use crate::resources::LatestImageResource;
use crate::tools::{DescribeSurroundingsTool, RobotNameTool};

/// Registers every robot-backed capability against a shared bridge.
pub struct RobotToolsExtension {
    manifest: ExtensionManifest,
    bridge: Arc<RobotBridge>,
}

impl RobotToolsExtension {
    pub fn new(bridge: Arc<RobotBridge>) -> Self {
        let manifest = ExtensionManifest::new("tools-robot", "Robot Tools", Version::new(0, 1, 0))
            .with_description("Robot name, surroundings and camera image")
            .with_provides(Provides {
                tools: vec!["describe_surroundings".to_string(), "robot_name".to_string()],
                resources: vec![crate::resources::LATEST_IMAGE_URI.to_string()],
                prompts: vec!["get_robot_info".to_string()],
            });

        Self { manifest, bridge }
    }
}

#[async_trait]
impl Extension for RobotToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        ctx.registry
            .register_tool(Arc::new(DescribeSurroundingsTool::new(self.bridge.clone())))?;
        ctx.registry
            .register_tool(Arc::new(RobotNameTool::new(self.bridge.clone())))?;
        ctx.registry
            .register_resource(Arc::new(LatestImageResource::new(self.bridge.clone())))?;
        ctx.registry
            .register_prompt(Arc::new(RobotInfoPrompt::new()))?;

        debug!("Registered {} robot capabilities", self.manifest.provides.len());
        Ok(())
    }
}
