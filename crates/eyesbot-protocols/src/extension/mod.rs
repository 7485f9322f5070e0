//! Extension protocol definitions.
//!
//! An extension bundles related capabilities and registers them at startup.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
