//! Resolver and fetcher combined for the capability layer.

use bytes::Bytes;
use eyesbot_config::{ConfigError, RobotConfig};
use tracing::debug;

use crate::error::BridgeError;
use crate::fetcher::{BodyMode, Fetcher};
use crate::resolver::UrlResolver;

/// Upstream path returning the robot's name as text.
pub const ROBOT_NAME_PATH: &str = "getRobotName";

/// Upstream path returning the last noted surroundings as text.
pub const SURROUNDINGS_PATH: &str = "getRobotSurroundings";

/// Robot camera selector for the `image` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraIndex {
    Left,
    Right,
}

impl CameraIndex {
    pub fn index(self) -> u8 {
        match self {
            CameraIndex::Left => 0,
            CameraIndex::Right => 1,
        }
    }

    /// Relative upstream path for this camera's latest image.
    pub fn image_path(self) -> String {
        format!("image?camera={}", self.index())
    }
}

/// Stateless bridge from capability calls to the robot HTTP API.
///
/// Configuration errors propagate; upstream failures come back as empty
/// text or empty bytes.
#[derive(Debug, Clone)]
pub struct RobotBridge {
    resolver: UrlResolver,
    fetcher: Fetcher,
}

impl RobotBridge {
    pub fn new(config: &RobotConfig) -> Result<Self, BridgeError> {
        let fetcher = Fetcher::new(config.request_timeout())?;
        Ok(Self::from_parts(UrlResolver::new(config), fetcher))
    }

    pub fn from_parts(resolver: UrlResolver, fetcher: Fetcher) -> Self {
        Self { resolver, fetcher }
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// GET `path` and return the body as text, or `""` on failure.
    pub async fn get_text(&self, path: &str) -> Result<String, ConfigError> {
        let url = self.resolver.resolve(path)?;
        debug!("Bridging text request to {}", url);
        Ok(self.fetcher.fetch(&url, BodyMode::Text).await.into_text())
    }

    /// GET `path` and return the raw body, or empty bytes on failure.
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ConfigError> {
        let url = self.resolver.resolve(path)?;
        debug!("Bridging binary request to {}", url);
        Ok(self.fetcher.fetch(&url, BodyMode::Binary).await.into_bytes())
    }

    pub async fn robot_name(&self) -> Result<String, ConfigError> {
        self.get_text(ROBOT_NAME_PATH).await
    }

    pub async fn surroundings(&self) -> Result<String, ConfigError> {
        self.get_text(SURROUNDINGS_PATH).await
    }

    pub async fn camera_image(&self, camera: CameraIndex) -> Result<Bytes, ConfigError> {
        self.get_bytes(&camera.image_path()).await
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
