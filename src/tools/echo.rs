//! The `echo` tool: log the input once and hand it back untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Target of the per-invocation log record.
pub const ECHO_LOG_TARGET: &str = "example_mcp_server::echo";

/// Input for `echo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EchoRequest {
    /// Text returned verbatim.
    pub text: String,
}

/// Emit `[echo] text=<value>` and return `text` unchanged.
pub fn echo_text(text: String) -> String {
    info!(target: ECHO_LOG_TARGET, "[echo] text={text}");
    text
}
