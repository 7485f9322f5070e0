//! Capability execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
