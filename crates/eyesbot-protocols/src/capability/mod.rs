//! Capability protocol definitions.
//!
//! Capabilities are what the bridge exposes to the calling agent: tools it
//! can call, resources it can read, and prompt templates it can fetch.

mod prompt;
mod resource;
mod tool;

pub use prompt::*;
pub use resource::*;
pub use tool::*;
