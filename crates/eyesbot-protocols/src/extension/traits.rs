//! Extension trait definition.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ExtensionContext, ExtensionManifest};
use crate::capability::{Prompt, Resource, Tool};
use crate::error::ExtensionError;

/// Core trait for all extensions.
///
/// An extension describes itself through its manifest and registers its
/// capabilities when initialized.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Initialize the extension with the given context.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;
}

/// Access to the capability registry from extensions.
pub trait CapabilityRegistryAccess: Send + Sync {
    /// Register a tool.
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError>;

    /// Register a resource.
    fn register_resource(&self, resource: Arc<dyn Resource>) -> Result<(), ExtensionError>;

    /// Register a prompt.
    fn register_prompt(&self, prompt: Arc<dyn Prompt>) -> Result<(), ExtensionError>;
}
