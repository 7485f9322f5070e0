//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the robot host[:port].
pub const ROBOT_BASE_URL_ENV: &str = "ROBOT_BASE_URL";

/// Environment variable holding the transport-security flag.
pub const SECURE_URL_ENV: &str = "SECURE_URL";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub robot: RobotConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values that can be rejected before any request is made.
    ///
    /// Missing robot settings are not checked here; they fail the
    /// capability invocation that needs them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.robot.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "robot.request_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.server.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Upstream robot API settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Host and optional port, without a scheme.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Raw transport-security flag. Only the exact string `"False"`
    /// selects plain HTTP.
    #[serde(default)]
    pub secure_url: Option<String>,

    /// Per-request timeout. Unset leaves the HTTP client default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl RobotConfig {
    pub fn new(base_url: impl Into<String>, secure_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            secure_url: Some(secure_url.into()),
            request_timeout_secs: None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Names of the required settings that are still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.is_none() {
            missing.push(ROBOT_BASE_URL_ENV);
        }
        if self.secure_url.is_none() {
            missing.push(SECURE_URL_ENV);
        }
        missing
    }
}

/// MCP server identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_instructions")]
    pub instructions: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            instructions: default_instructions(),
        }
    }
}

fn default_server_name() -> String {
    "EyesBot MCP Server".to_string()
}

fn default_instructions() -> String {
    "When you are asked for the name of the robot or a description of its surroundings"
        .to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling log files. Unset logs to stderr only.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
