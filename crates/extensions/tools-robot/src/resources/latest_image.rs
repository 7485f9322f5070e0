//! Latest camera image resource.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use eyesbot_bridge::{CameraIndex, RobotBridge};
use eyesbot_protocols::error::CapabilityError;
use eyesbot_protocols::{Resource, ResourceContents, ResourceDefinition};

pub const LATEST_IMAGE_URI: &str = "robot://camera/images/latest/";

/// Most recent PNG from the robot's left camera.
///
/// Always reads camera 0, even though the upstream endpoint also serves the
/// right camera. An unreachable robot yields a zero-length blob.
pub struct LatestImageResource {
    definition: ResourceDefinition,
    bridge: Arc<RobotBridge>,
}

impl LatestImageResource {
    const CAMERA: CameraIndex = CameraIndex::Left;

    pub fn new(bridge: Arc<RobotBridge>) -> Self {
        let definition = ResourceDefinition::new(LATEST_IMAGE_URI, "latest_image")
            .with_description(
                "The most recent image captured by the robot's left or right camera.  \
                 Left is 0 and right is 1",
            )
            .with_mime_type("image/png");
        Self { definition, bridge }
    }
}

#[async_trait]
impl Resource for LatestImageResource {
    fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    async fn read(&self) -> Result<ResourceContents, CapabilityError> {
        let image = self
            .bridge
            .camera_image(Self::CAMERA)
            .await
            .map_err(|e| CapabilityError::Configuration(e.to_string()))?;
        debug!("Camera {} image: {} bytes", Self::CAMERA.index(), image.len());
        Ok(ResourceContents::blob(&self.definition, image))
    }
}
