use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "Loaded config {source}; waiting in {transport} mode (host={host}, port={port}). Call `echo` with {{\"text\": \"...\"}} to get the same text back.",
        source = config.source_label(),
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port
    )
}
