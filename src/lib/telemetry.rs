//! Telemetry initialization and runtime state records.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Target used for runtime lifecycle records.
pub const RUNTIME_TARGET: &str = "example_mcp_server::runtime";
/// Target used for configuration loading records.
pub const CONFIG_TARGET: &str = "example_mcp_server::config";

/// Initialize `tracing` and format developer logs.
///
/// Logs are written to stderr because stdout carries the stdio transport.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub server_name: &'a str,
    pub server_version: &'a str,
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub config_source: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: RUNTIME_TARGET,
        server_name = telemetry.server_name,
        server_version = telemetry.server_version,
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        config_source = telemetry.config_source,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
