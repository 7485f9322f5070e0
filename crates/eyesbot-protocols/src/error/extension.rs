//! Extension-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),
}
