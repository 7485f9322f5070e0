//! MCP (Model Context Protocol) server for EyesBot.
//!
//! Serves registered tools, resources and prompts to an MCP client over
//! newline-delimited JSON-RPC on stdio.

mod protocol;
mod registry;
mod server;
mod transport;

pub use protocol::{
    LATEST_PROTOCOL_VERSION, McpContent, McpError, McpMethod, McpRequest, McpResponse,
    RequestId, SUPPORTED_PROTOCOL_VERSIONS, ServerInfo,
};
pub use registry::CapabilityRegistry;
pub use server::McpServer;
pub use transport::{LineTransport, ServerTransport, StdioTransport, TransportError};
