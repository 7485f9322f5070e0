//! Bridge setup errors.

use eyesbot_config::ConfigError;
use thiserror::Error;

/// Errors that stop the bridge from producing a request at all.
///
/// Upstream failures are not represented here; see [`crate::FetchError`].
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(String),
}
