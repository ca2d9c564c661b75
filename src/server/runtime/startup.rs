use std::{process::ExitCode, time::Duration};

use anyhow::{Context, Error};
use rmcp::ServiceExt;
use tokio::net::TcpListener;

use crate::{
    cli::{LaunchProfile, TransportMode},
    lib::telemetry::{self, RUNTIME_TARGET},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, EchoServer, SERVER_NAME, SERVER_VERSION},
    },
};

/// Backoff after a failed `accept`, e.g. when the fd limit is hit.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Start the MCP server and select stdio/TCP based on the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&profile, &config);
    let server = EchoServer::new(instructions);
    let config_source = config.source_label();
    let is_tcp = profile.transport == TransportMode::Tcp;

    telemetry::emit_runtime_mode(&telemetry::RuntimeModeTelemetry {
        server_name: SERVER_NAME,
        server_version: SERVER_VERSION,
        transport: profile.transport.as_str(),
        host: is_tcp.then_some(config.server.host.as_str()),
        port: is_tcp.then_some(config.server.port),
        config_source: &config_source,
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Tcp => run_tcp(server, &config).await,
    }
}

async fn run_stdio(server: EchoServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: EchoServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: RUNTIME_TARGET,
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!(
                    target: RUNTIME_TARGET,
                    bind_addr = %addr,
                    error = %err,
                    "Failed to accept TCP connection"
                );
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        tracing::info!(
            target: RUNTIME_TARGET,
            peer = %peer,
            "Accepted connection from MCP client"
        );
        let session = server.clone();
        tokio::spawn(async move {
            let result = match session.serve(stream).await {
                Ok(running) => running.waiting().await.map(|_| ()).map_err(Error::new),
                Err(err) => Err(Error::new(err)),
            };
            if let Err(err) = result {
                tracing::warn!(
                    target: RUNTIME_TARGET,
                    peer = %peer,
                    error = %err,
                    "MCP session ended with an error"
                );
            }
        });
    }
}
