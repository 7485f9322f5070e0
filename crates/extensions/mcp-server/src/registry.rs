//! Capability registry for tools, resources and prompts.

use dashmap::DashMap;
use std::sync::Arc;

use eyesbot_protocols::error::ExtensionError;
use eyesbot_protocols::extension::CapabilityRegistryAccess;
use eyesbot_protocols::{
    Prompt, PromptDefinition, Resource, ResourceDefinition, Tool, ToolDefinition,
};

/// Items that can be stored in a registry under a unique key.
pub(crate) trait Registerable: Send + Sync {
    fn registry_id(&self) -> &str;
}

impl Registerable for dyn Tool {
    fn registry_id(&self) -> &str {
        &self.definition().name
    }
}

impl Registerable for dyn Resource {
    fn registry_id(&self) -> &str {
        &self.definition().uri
    }
}

impl Registerable for dyn Prompt {
    fn registry_id(&self) -> &str {
        &self.definition().name
    }
}

/// Thread-safe map of items by ID with duplicate checking.
pub(crate) struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register an item. Fails if the ID is taken.
    pub fn register(&self, item: Arc<T>) -> Result<(), ExtensionError> {
        let id = item.registry_id().to_string();

        if self.items.contains_key(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        self.items.insert(id, item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All items, ordered by ID.
    pub fn sorted(&self) -> Vec<Arc<T>> {
        let mut items: Vec<Arc<T>> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.registry_id().cmp(b.registry_id()));
        items
    }
}

/// Registry of everything the MCP server exposes.
#[derive(Default)]
pub struct CapabilityRegistry {
    tools: BaseRegistry<dyn Tool>,
    resources: BaseRegistry<dyn Resource>,
    prompts: BaseRegistry<dyn Prompt>,
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn resource(&self, uri: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(uri)
    }

    pub fn prompt(&self, name: &str) -> Option<Arc<dyn Prompt>> {
        self.prompts.get(name)
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.sorted().iter().map(|t| t.definition().clone()).collect()
    }

    pub fn resource_definitions(&self) -> Vec<ResourceDefinition> {
        self.resources.sorted().iter().map(|r| r.definition().clone()).collect()
    }

    pub fn prompt_definitions(&self) -> Vec<PromptDefinition> {
        self.prompts.sorted().iter().map(|p| p.definition().clone()).collect()
    }

    /// Total number of registered capabilities.
    pub fn len(&self) -> usize {
        self.tools.len() + self.resources.len() + self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CapabilityRegistryAccess for CapabilityRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.tools.register(tool)
    }

    fn register_resource(&self, resource: Arc<dyn Resource>) -> Result<(), ExtensionError> {
        self.resources.register(resource)
    }

    fn register_prompt(&self, prompt: Arc<dyn Prompt>) -> Result<(), ExtensionError> {
        self.prompts.register(prompt)
    }
}
