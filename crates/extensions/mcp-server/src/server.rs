//! MCP request dispatch and the serve loop.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, info, warn};

use eyesbot_protocols::{CapabilityError, ResourceContents, Role};

use crate::protocol::{
    McpContent, McpError, McpMethod, McpPromptMessage, McpRequest, McpResourceContents,
    McpResponse, McpToolResult, RequestId, ServerInfo, negotiate_protocol_version,
};
use crate::registry::CapabilityRegistry;
use crate::transport::{ServerTransport, TransportError};

/// Serves the capabilities in a [`CapabilityRegistry`] over MCP.
///
/// Requests are handled one at a time, in arrival order.
pub struct McpServer {
    info: ServerInfo,
    instructions: Option<String>,
    registry: Arc<CapabilityRegistry>,
}

type HandlerResult = Result<serde_json::Value, McpError>;

impl McpServer {
    pub fn new(info: ServerInfo, registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            info,
            instructions: None,
            registry,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Read requests from `transport` and answer them until the peer closes.
    pub async fn serve<T>(&self, transport: &mut T) -> Result<(), TransportError>
    where
        T: ServerTransport + ?Sized,
    {
        info!(
            "MCP server '{}' ready with {} capabilities",
            self.info.name,
            self.registry.len()
        );

        while let Some(line) = transport.receive().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                transport.send(&response).await?;
            }
        }

        info!("MCP client closed the connection");
        Ok(())
    }

    /// Parse and handle one raw message.
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Unparseable MCP message: {}", e);
                return Some(McpResponse::error(None, McpError::parse_error()));
            }
        };

        match serde_json::from_value::<McpRequest>(value.clone()) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Invalid MCP request: {}", e);
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
                Some(McpResponse::error(id, McpError::invalid_request()))
            }
        }
    }

    /// Handle one request. Notifications never produce a response.
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        debug!("Handling MCP request: {} (id={:?})", request.method, request.id);

        let result = match McpMethod::parse(&request.method) {
            Some(method) => self.dispatch(method, &request).await,
            None => Err(McpError::method_not_found(&request.method)),
        };

        if request.is_notification() {
            return None;
        }
        let id = request.id;
        Some(match result {
            Ok(value) => McpResponse::success(id, value),
            Err(error) => McpResponse::error(id, error),
        })
    }

    async fn dispatch(&self, method: McpMethod, request: &McpRequest) -> HandlerResult {
        match method {
            McpMethod::Initialize => Ok(self.initialize(request)),
            McpMethod::Initialized | McpMethod::Cancelled | McpMethod::Ping => {
                Ok(serde_json::json!({}))
            }
            McpMethod::SetLogLevel => {
                debug!("Client requested log level {:?}", request.param_str("level"));
                Ok(serde_json::json!({}))
            }
            McpMethod::ListTools => Ok(serde_json::json!({
                "tools": self.registry.tool_definitions()
            })),
            McpMethod::CallTool => self.call_tool(request).await,
            McpMethod::ListResources => Ok(serde_json::json!({
                "resources": self.registry.resource_definitions()
            })),
            McpMethod::ListResourceTemplates => Ok(serde_json::json!({
                "resourceTemplates": []
            })),
            McpMethod::ReadResource => self.read_resource(request).await,
            McpMethod::ListPrompts => Ok(serde_json::json!({
                "prompts": self.registry.prompt_definitions()
            })),
            McpMethod::GetPrompt => self.get_prompt(request).await,
        }
    }

    fn initialize(&self, request: &McpRequest) -> serde_json::Value {
        let version = negotiate_protocol_version(request.param_str("protocolVersion"));
        let client = request
            .params
            .as_ref()
            .and_then(|p| p.pointer("/clientInfo/name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");
        info!("MCP client '{}' initialized (protocol {})", client, version);

        let mut result = serde_json::json!({
            "protocolVersion": version,
            "capabilities": {
                "tools": {},
                "resources": {},
                "prompts": {},
                "logging": {}
            },
            "serverInfo": self.info
        });
        if let Some(instructions) = &self.instructions {
            result["instructions"] = serde_json::json!(instructions);
        }
        result
    }

    async fn call_tool(&self, request: &McpRequest) -> HandlerResult {
        let name = request
            .param_str("name")
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;
        let tool = self
            .registry
            .tool(name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {}", name)))?;
        let arguments = request.param_object("arguments");

        let result = match tool.validate(&arguments) {
            Ok(()) => tool.execute(arguments).await,
            Err(e) => Err(e),
        };

        let result = match result {
            Ok(result) => McpToolResult::text(result.content, false),
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                McpToolResult::text(e.to_string(), true)
            }
        };
        to_value(&result)
    }

    async fn read_resource(&self, request: &McpRequest) -> HandlerResult {
        let uri = request
            .param_str("uri")
            .ok_or_else(|| McpError::invalid_params("Missing resource uri"))?;
        let resource = self
            .registry
            .resource(uri)
            .ok_or_else(|| McpError::resource_not_found(uri))?;

        let contents = resource.read().await.map_err(|e| {
            warn!("Resource '{}' failed: {}", uri, e);
            capability_error(e)
        })?;
        if contents.is_empty() {
            debug!("Resource '{}' returned no data", uri);
        }

        Ok(serde_json::json!({
            "contents": [encode_contents(contents)]
        }))
    }

    async fn get_prompt(&self, request: &McpRequest) -> HandlerResult {
        let name = request
            .param_str("name")
            .ok_or_else(|| McpError::invalid_params("Missing prompt name"))?;
        let prompt = self
            .registry
            .prompt(name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown prompt: {}", name)))?;

        let messages = prompt
            .render(request.param_object("arguments"))
            .await
            .map_err(capability_error)?;
        let messages: Vec<McpPromptMessage> = messages
            .into_iter()
            .map(|m| McpPromptMessage {
                role: match m.role {
                    Role::User => "user".to_string(),
                },
                content: McpContent::Text { text: m.text },
            })
            .collect();

        let mut result = serde_json::json!({ "messages": messages });
        if let Some(description) = &prompt.definition().description {
            result["description"] = serde_json::json!(description);
        }
        Ok(result)
    }
}

fn encode_contents(contents: ResourceContents) -> McpResourceContents {
    match contents {
        ResourceContents::Text {
            uri,
            mime_type,
            text,
        } => McpResourceContents {
            uri,
            mime_type,
            text: Some(text),
            blob: None,
        },
        ResourceContents::Blob {
            uri,
            mime_type,
            data,
        } => McpResourceContents {
            uri,
            mime_type,
            text: None,
            blob: Some(BASE64.encode(&data)),
        },
    }
}

fn capability_error(err: CapabilityError) -> McpError {
    match err {
        CapabilityError::InvalidParameters(msg) => McpError::invalid_params(msg),
        CapabilityError::ResourceNotFound(uri) => McpError::resource_not_found(&uri),
        other => McpError::internal_error(other.to_string()),
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> HandlerResult {
    serde_json::to_value(value).map_err(|e| McpError::internal_error(e.to_string()))
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
