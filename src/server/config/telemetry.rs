use std::path::Path;

use tracing::{debug, info};

use super::ServerConfig;
use crate::{
    cli::{profile::MCP_CONFIG_ENV, ConfigSource},
    lib::telemetry::CONFIG_TARGET,
};

pub fn log_source(path: &Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: CONFIG_TARGET,
            path = %path.display(),
            "Loading configuration from --config"
        ),
        ConfigSource::Env => info!(
            target: CONFIG_TARGET,
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        ),
        ConfigSource::Default => debug!(
            target: CONFIG_TARGET,
            path = %path.display(),
            env = MCP_CONFIG_ENV,
            "MCP_CONFIG_PATH not set; using default config.toml"
        ),
    }
}

pub fn log_defaults(path: &Path) {
    debug!(
        target: CONFIG_TARGET,
        path = %path.display(),
        "Default config.toml not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: CONFIG_TARGET,
        source = %config.source_label(),
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded successfully"
    );
}
