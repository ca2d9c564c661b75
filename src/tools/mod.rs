//! MCP tools registered on the server and helper functions for the router.

pub mod echo;

use rmcp::handler::server::router::tool::ToolRouter;

pub use echo::{echo_text, EchoRequest, ECHO_LOG_TARGET};

pub type ServerToolRouter<S> = ToolRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}
