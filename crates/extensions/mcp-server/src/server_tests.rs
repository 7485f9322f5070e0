use super::*;
use async_trait::async_trait;
use bytes::Bytes;
use eyesbot_protocols::extension::CapabilityRegistryAccess;
use eyesbot_protocols::{
    Prompt, PromptDefinition, PromptMessage, Resource, ResourceDefinition, Tool, ToolDefinition,
    ToolResult,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::transport::LineTransport;

struct FixedTool {
    definition: ToolDefinition,
    outcome: Result<&'static str, &'static str>,
}

#[async_trait]
impl Tool for FixedTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, CapabilityError> {
        match self.outcome {
            Ok(text) => Ok(ToolResult::success(text)),
            Err(msg) => Err(CapabilityError::Configuration(msg.to_string())),
        }
    }
}

struct FixedImage {
    definition: ResourceDefinition,
    data: Option<&'static [u8]>,
}

#[async_trait]
impl Resource for FixedImage {
    fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    async fn read(&self) -> Result<ResourceContents, CapabilityError> {
        match self.data {
            Some(data) => Ok(ResourceContents::blob(&self.definition, Bytes::from_static(data))),
            None => Err(CapabilityError::Configuration("SECURE_URL not set".to_string())),
        }
    }
}

struct FixedPrompt {
    definition: PromptDefinition,
}

#[async_trait]
impl Prompt for FixedPrompt {
    fn definition(&self) -> &PromptDefinition {
        &self.definition
    }

    async fn render(
        &self,
        _arguments: serde_json::Value,
    ) -> Result<Vec<PromptMessage>, CapabilityError> {
        Ok(vec![PromptMessage::user("What is your name?")])
    }
}

fn server() -> McpServer {
    let registry = Arc::new(CapabilityRegistry::new());
    registry
        .register_tool(Arc::new(FixedTool {
            definition: ToolDefinition::new("robot_name", "Get the name of the robot"),
            outcome: Ok("Astro"),
        }))
        .unwrap();
    registry
        .register_tool(Arc::new(FixedTool {
            definition: ToolDefinition::new("broken", "Always misconfigured"),
            outcome: Err("ROBOT_BASE_URL not set"),
        }))
        .unwrap();
    registry
        .register_resource(Arc::new(FixedImage {
            definition: ResourceDefinition::new("robot://camera/images/latest/", "latest_image")
                .with_mime_type("image/png"),
            data: Some(b"PNG"),
        }))
        .unwrap();
    registry
        .register_resource(Arc::new(FixedImage {
            definition: ResourceDefinition::new("robot://empty", "empty"),
            data: Some(b""),
        }))
        .unwrap();
    registry
        .register_resource(Arc::new(FixedImage {
            definition: ResourceDefinition::new("robot://broken", "broken"),
            data: None,
        }))
        .unwrap();
    registry
        .register_prompt(Arc::new(FixedPrompt {
            definition: PromptDefinition::new("ask_name").with_description("Ask for the name"),
        }))
        .unwrap();

    McpServer::new(ServerInfo::new("Test Server", "0.1.0"), registry)
        .with_instructions("Ask about the robot")
}

async fn call(server: &McpServer, method: &str, params: serde_json::Value) -> McpResponse {
    server
        .handle(McpRequest::new(1i64, method).with_params(params))
        .await
        .unwrap()
}

fn result(response: McpResponse) -> serde_json::Value {
    assert!(!response.is_error(), "unexpected error: {:?}", response.error);
    response.result.unwrap()
}

#[tokio::test]
async fn test_initialize() {
    let server = server();
    let response = call(
        &server,
        "initialize",
        serde_json::json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "1.0"}
        }),
    )
    .await;
    let result = result(response);
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "Test Server");
    assert_eq!(result["instructions"], "Ask about the robot");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
    assert!(result["capabilities"]["prompts"].is_object());
}

#[tokio::test]
async fn test_initialize_unknown_version_gets_latest() {
    let result = result(
        call(&server(), "initialize", serde_json::json!({"protocolVersion": "2000-01-01"})).await,
    );
    assert_eq!(result["protocolVersion"], crate::protocol::LATEST_PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let server = server();
    assert!(server.handle(McpRequest::notification("notifications/initialized")).await.is_none());
    assert!(server.handle(McpRequest::notification("notifications/unknown")).await.is_none());
}

#[tokio::test]
async fn test_ping() {
    assert_eq!(result(call(&server(), "ping", serde_json::json!({})).await), serde_json::json!({}));
}

#[tokio::test]
async fn test_unknown_method() {
    let response = call(&server(), "sampling/createMessage", serde_json::json!({})).await;
    assert_eq!(response.id, Some(RequestId::Number(1)));
    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert_eq!(error.message, "Method not found: sampling/createMessage");
}

#[tokio::test]
async fn test_list_tools() {
    let result = result(call(&server(), "tools/list", serde_json::json!({})).await);
    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["name"], "broken");
    assert_eq!(tools[1]["name"], "robot_name");
    assert_eq!(tools[1]["inputSchema"]["type"], "object");
}

#[tokio::test]
async fn test_call_tool() {
    let result = result(
        call(&server(), "tools/call", serde_json::json!({"name": "robot_name", "arguments": {}}))
            .await,
    );
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "Astro");
}

#[tokio::test]
async fn test_call_tool_without_arguments() {
    let result = result(call(&server(), "tools/call", serde_json::json!({"name": "robot_name"})).await);
    assert_eq!(result["content"][0]["text"], "Astro");
}

#[tokio::test]
async fn test_call_tool_capability_error_is_tool_error() {
    let result = result(call(&server(), "tools/call", serde_json::json!({"name": "broken"})).await);
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("ROBOT_BASE_URL"));
}

#[tokio::test]
async fn test_call_tool_bad_arguments() {
    let result = result(
        call(&server(), "tools/call", serde_json::json!({"name": "robot_name", "arguments": [1]}))
            .await,
    );
    assert_eq!(result["isError"], true);
}

#[tokio::test]
async fn test_call_unknown_tool() {
    let response = call(&server(), "tools/call", serde_json::json!({"name": "fly"})).await;
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("fly"));
}

#[tokio::test]
async fn test_call_tool_missing_name() {
    let response = call(&server(), "tools/call", serde_json::json!({})).await;
    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn test_list_resources() {
    let result = result(call(&server(), "resources/list", serde_json::json!({})).await);
    let resources = result["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 3);
    let image = resources
        .iter()
        .find(|r| r["uri"] == "robot://camera/images/latest/")
        .unwrap();
    assert_eq!(image["mimeType"], "image/png");
    assert_eq!(image["name"], "latest_image");
}

#[tokio::test]
async fn test_list_resource_templates_is_empty() {
    let result = result(call(&server(), "resources/templates/list", serde_json::json!({})).await);
    assert_eq!(result["resourceTemplates"], serde_json::json!([]));
}

#[tokio::test]
async fn test_read_resource_blob_is_base64() {
    let result = result(
        call(
            &server(),
            "resources/read",
            serde_json::json!({"uri": "robot://camera/images/latest/"}),
        )
        .await,
    );
    let contents = &result["contents"][0];
    assert_eq!(contents["uri"], "robot://camera/images/latest/");
    assert_eq!(contents["mimeType"], "image/png");
    assert_eq!(contents["blob"], "UE5H");
    assert!(contents.get("text").is_none());
}

#[tokio::test]
async fn test_read_empty_resource_gives_empty_blob() {
    let result =
        result(call(&server(), "resources/read", serde_json::json!({"uri": "robot://empty"})).await);
    assert_eq!(result["contents"][0]["blob"], "");
}

#[tokio::test]
async fn test_read_resource_failure_is_internal_error() {
    let response = call(&server(), "resources/read", serde_json::json!({"uri": "robot://broken"})).await;
    let error = response.error.unwrap();
    assert_eq!(error.code, -32603);
    assert!(error.message.contains("SECURE_URL"));
}

#[tokio::test]
async fn test_read_unknown_resource() {
    let response = call(&server(), "resources/read", serde_json::json!({"uri": "robot://nope"})).await;
    assert_eq!(response.error.unwrap().code, -32002);
}

#[tokio::test]
async fn test_list_prompts() {
    let result = result(call(&server(), "prompts/list", serde_json::json!({})).await);
    assert_eq!(result["prompts"][0]["name"], "ask_name");
    assert_eq!(result["prompts"][0]["description"], "Ask for the name");
}

#[tokio::test]
async fn test_get_prompt() {
    let result = result(call(&server(), "prompts/get", serde_json::json!({"name": "ask_name"})).await);
    assert_eq!(result["description"], "Ask for the name");
    assert_eq!(result["messages"][0]["role"], "user");
    assert_eq!(result["messages"][0]["content"]["type"], "text");
    assert_eq!(result["messages"][0]["content"]["text"], "What is your name?");
}

#[tokio::test]
async fn test_get_unknown_prompt() {
    let response = call(&server(), "prompts/get", serde_json::json!({"name": "nope"})).await;
    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn test_handle_line_parse_error() {
    let response = server().handle_line("{not json").await.unwrap();
    assert!(response.id.is_none());
    assert_eq!(response.error.unwrap().code, -32700);
}

#[tokio::test]
async fn test_handle_line_invalid_request_keeps_id() {
    let response = server().handle_line(r#"{"id": 9, "params": {}}"#).await.unwrap();
    assert_eq!(response.id, Some(RequestId::Number(9)));
    assert_eq!(response.error.unwrap().code, -32600);
}

#[tokio::test]
async fn test_handle_line_null_id_is_answered() {
    let response = server()
        .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(response.id, Some(RequestId::Null));
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["id"].is_null());
    assert_eq!(json["result"], serde_json::json!({}));
}

#[tokio::test]
async fn test_serve_survives_invalid_utf8() {
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n");
    input.extend_from_slice(b"\xff\xfe garbage\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n");
    let mut transport = LineTransport::new(&input[..], Vec::new());

    server().serve(&mut transport).await.unwrap();

    let written = String::from_utf8(transport.into_writer()).unwrap();
    let responses: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], 1);
    assert!(responses[1]["id"].is_null());
    assert_eq!(responses[1]["error"]["code"], -32700);
    assert_eq!(responses[2]["id"], 2);
    assert_eq!(responses[2]["result"], serde_json::json!({}));
}

#[tokio::test]
async fn test_serve_over_duplex() {
    let (client, server_side) = tokio::io::duplex(64 * 1024);
    let (server_read, server_write) = tokio::io::split(server_side);
    let (client_read, mut client_write) = tokio::io::split(client);

    let handle = tokio::spawn(async move {
        let mut transport = LineTransport::new(server_read, server_write);
        server().serve(&mut transport).await
    });

    client_write
        .write_all(
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-06-18"}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
                "\n",
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"robot_name"}}"#,
                "\n",
            )
            .as_bytes(),
        )
        .await
        .unwrap();
    client_write.shutdown().await.unwrap();

    let mut lines = BufReader::new(client_read).lines();
    let first: serde_json::Value =
        serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();

    assert_eq!(first["id"], 1);
    assert_eq!(first["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(second["id"], 2);
    assert_eq!(second["result"]["content"][0]["text"], "Astro");

    handle.await.unwrap().unwrap();
    assert!(lines.next_line().await.unwrap().is_none());
}
