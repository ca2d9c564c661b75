use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, ErrorData, Implementation, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};

use crate::tools::{self, echo_text, EchoRequest, ServerToolRouter};

/// Fixed identifier advertised to MCP clients.
pub const SERVER_NAME: &str = "example-mcp-server";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct EchoServer {
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl EchoServer {
    pub fn new(instructions: String) -> Self {
        Self {
            instructions: Arc::new(instructions),
            tool_router: tools::build_router(Self::tool_router),
        }
    }
}

#[tool_router(router = tool_router)]
impl EchoServer {
    #[tool(name = "echo", description = "Return the input text unchanged.")]
    async fn echo(
        &self,
        Parameters(request): Parameters<EchoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = echo_text(request.text);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for EchoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::default()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }
}
