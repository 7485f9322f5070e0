//! # EyesBot Protocols
//!
//! Capability definitions (traits) shared by the EyesBot MCP bridge.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Registers a group of capabilities
//! - [`Tool`] - Callable operation with a text result
//! - [`Resource`] - Readable resource addressed by URI
//! - [`Prompt`] - Prompt template rendered into messages

pub mod capability;
pub mod error;
pub mod extension;
pub mod types;

pub use capability::{
    Prompt, PromptDefinition, PromptMessage, Resource, ResourceContents,
    ResourceDefinition, Role, Tool, ToolDefinition, ToolResult,
};
pub use error::{CapabilityError, ExtensionError};
pub use extension::{CapabilityRegistryAccess, Extension, ExtensionContext, ExtensionManifest};
pub use types::Version;
