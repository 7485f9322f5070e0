//! Server initialization and startup logic for EyesBot MCP.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use eyesbot_bridge::RobotBridge;
use eyesbot_config::{Config, LoggingConfig};
use eyesbot_mcp_server::{
    CapabilityRegistry, McpServer, ServerInfo, ServerTransport, StdioTransport, TransportError,
};
use eyesbot_protocols::extension::{Extension, ExtensionContext};
use eyesbot_tools_robot::RobotToolsExtension;

/// Initialize tracing on stderr, plus a daily log file when `dir` is set.
///
/// The returned guard flushes the file writer and must outlive the server.
pub(crate) fn init_tracing(
    logging: &LoggingConfig,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match logging.dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("eyesbot-mcp")
                .filename_suffix("log")
                .max_log_files(30)
                .build(Path::new(dir))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // stdout carries MCP frames
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Build the capability registry for one robot.
pub(crate) async fn build_server(
    config: &Config,
    bridge: Arc<RobotBridge>,
) -> Result<McpServer, Box<dyn std::error::Error>> {
    let registry = Arc::new(CapabilityRegistry::new());
    let mut robot = RobotToolsExtension::new(bridge);
    robot
        .initialize(ExtensionContext::new(registry.clone()))
        .await?;
    info!(
        "Extension '{}' registered {} capabilities",
        robot.manifest().id,
        registry.len()
    );

    let info = ServerInfo::new(config.server.name.clone(), env!("CARGO_PKG_VERSION"));
    Ok(McpServer::new(info, registry).with_instructions(config.server.instructions.clone()))
}

/// Run the MCP server on stdio until the client disconnects.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    for name in config.robot.missing() {
        warn!("{} is not set; robot capabilities will fail until it is configured", name);
    }

    let bridge = Arc::new(RobotBridge::new(&config.robot)?);
    let server = build_server(&config, bridge).await?;

    info!("Starting {} on stdio", server.info().name);
    let mut transport = StdioTransport::stdio();
    serve_logged(&server, &mut transport).await?;
    info!("Client disconnected, shutting down");

    Ok(())
}

/// Serve until the peer closes, logging a transport failure before returning it.
pub(crate) async fn serve_logged<T>(
    server: &McpServer,
    transport: &mut T,
) -> Result<(), TransportError>
where
    T: ServerTransport + ?Sized,
{
    server.serve(transport).await.map_err(|e| {
        error!("MCP transport failed: {}", e);
        e
    })
}
