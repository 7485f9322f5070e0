//! Error types for the EyesBot protocol layer.

mod capability;
mod extension;

pub use capability::*;
pub use extension::*;
