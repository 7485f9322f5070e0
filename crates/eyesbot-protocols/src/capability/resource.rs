//! Resource trait and its definition/content types.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

/// Definition of a readable resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    /// URI the caller reads the resource by.
    pub uri: String,

    /// Short name.
    pub name: String,

    /// Description of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// MIME type of the contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ResourceDefinition {
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: None,
            mime_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Contents returned from reading a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContents {
    Text {
        uri: String,
        mime_type: Option<String>,
        text: String,
    },
    Blob {
        uri: String,
        mime_type: Option<String>,
        data: Bytes,
    },
}

impl ResourceContents {
    /// Binary contents for the resource described by `definition`.
    pub fn blob(definition: &ResourceDefinition, data: Bytes) -> Self {
        Self::Blob {
            uri: definition.uri.clone(),
            mime_type: definition.mime_type.clone(),
            data,
        }
    }

    /// Text contents for the resource described by `definition`.
    pub fn text(definition: &ResourceDefinition, text: impl Into<String>) -> Self {
        Self::Text {
            uri: definition.uri.clone(),
            mime_type: definition.mime_type.clone(),
            text: text.into(),
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            Self::Text { uri, .. } | Self::Blob { uri, .. } => uri,
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Text { mime_type, .. } | Self::Blob { mime_type, .. } => mime_type.as_deref(),
        }
    }

    /// Zero-length contents stand for "no data available".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { text, .. } => text.is_empty(),
            Self::Blob { data, .. } => data.is_empty(),
        }
    }
}

/// Core trait for readable resources.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Returns the resource definition.
    fn definition(&self) -> &ResourceDefinition;

    /// Read the current contents.
    async fn read(&self) -> Result<ResourceContents, CapabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_definition() -> ResourceDefinition {
        ResourceDefinition::new("robot://camera/images/latest/", "latest_image")
            .with_description("Latest image")
            .with_mime_type("image/png")
    }

    #[test]
    fn test_definition_builder() {
        let def = image_definition();
        assert_eq!(def.uri, "robot://camera/images/latest/");
        assert_eq!(def.name, "latest_image");
        assert_eq!(def.description.as_deref(), Some("Latest image"));
        assert_eq!(def.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_definition_serializes_mime_type_camel_case() {
        let json = serde_json::to_value(image_definition()).unwrap();
        assert_eq!(json["mimeType"], "image/png");
    }

    #[test]
    fn test_definition_skips_missing_optionals() {
        let json = serde_json::to_value(ResourceDefinition::new("a://b", "b")).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("mimeType").is_none());
    }

    #[test]
    fn test_blob_contents_inherit_definition() {
        let def = image_definition();
        let contents = ResourceContents::blob(&def, Bytes::from_static(b"\x89PNG"));
        assert_eq!(contents.uri(), def.uri);
        assert_eq!(contents.mime_type(), Some("image/png"));
        assert!(!contents.is_empty());
    }

    #[test]
    fn test_empty_blob() {
        let contents = ResourceContents::blob(&image_definition(), Bytes::new());
        assert!(contents.is_empty());
    }

    #[test]
    fn test_text_contents() {
        let def = ResourceDefinition::new("robot://notes", "notes").with_mime_type("text/plain");
        let contents = ResourceContents::text(&def, "hello");
        assert!(matches!(contents, ResourceContents::Text { ref text, .. } if text == "hello"));
        assert_eq!(contents.mime_type(), Some("text/plain"));
    }
}
