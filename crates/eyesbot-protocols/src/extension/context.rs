//! Extension context for initialization.

use std::sync::Arc;

use super::CapabilityRegistryAccess;

/// Context passed to extensions during initialization.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Registry for tools, resources and prompts.
    pub registry: Arc<dyn CapabilityRegistryAccess>,
}

impl ExtensionContext {
    pub fn new(registry: Arc<dyn CapabilityRegistryAccess>) -> Self {
        Self { registry }
    }
}
