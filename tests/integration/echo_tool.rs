use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult, ClientInfo},
    serve_client,
    service::{RoleClient, RunningService},
    ServiceExt,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use example_mcp_server::server::runtime::{EchoServer, SERVER_NAME, SERVER_VERSION};

type TestClient = RunningService<RoleClient, ClientInfo>;

async fn connect() -> Result<(TestClient, JoinHandle<Result<()>>)> {
    let server = EchoServer::new("echo test server".into());
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;
    Ok((client, server_task))
}

async fn call_echo(client: &TestClient, arguments: Value) -> Result<CallToolResult> {
    let args = arguments.as_object().expect("JSON object").clone();
    let result = client
        .call_tool(CallToolRequestParam {
            name: "echo".into(),
            arguments: Some(args),
        })
        .await?;
    Ok(result)
}

fn first_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|content| content.text.as_str())
}

#[tokio::test]
async fn server_identifies_with_fixed_name() -> Result<()> {
    let (client, server_task) = connect().await?;

    let info = client.peer_info().expect("server info after handshake");
    assert_eq!(info.server_info.name, SERVER_NAME);
    assert_eq!(info.server_info.version, SERVER_VERSION);

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn list_tools_exposes_only_echo_with_required_text() -> Result<()> {
    let (client, server_task) = connect().await?;

    let list = client.list_tools(None).await?;
    assert_eq!(list.tools.len(), 1, "tools: {:?}", list.tools);
    let tool = &list.tools[0];
    assert_eq!(tool.name.as_ref(), "echo");
    assert_eq!(
        tool.input_schema.get("required"),
        Some(&json!(["text"])),
        "schema: {:?}",
        tool.input_schema
    );
    assert_eq!(
        tool.input_schema
            .get("properties")
            .and_then(|props| props.get("text"))
            .and_then(|text| text.get("type")),
        Some(&json!("string"))
    );

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn echo_returns_input_verbatim() -> Result<()> {
    let (client, server_task) = connect().await?;

    for input in ["hello", "", "  padded  ", "한글 ✓ émoji 🚀", "line one\nline two\r\n"] {
        let result = call_echo(&client, json!({ "text": input })).await?;
        assert_ne!(result.is_error, Some(true), "input {input:?}");
        assert_eq!(result.content.len(), 1, "input {input:?}");
        assert_eq!(first_text(&result), Some(input), "input {input:?}");
    }

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn repeated_echo_is_idempotent() -> Result<()> {
    let (client, server_task) = connect().await?;

    let first = call_echo(&client, json!({ "text": "again" })).await?;
    let second = call_echo(&client, json!({ "text": "again" })).await?;
    assert_eq!(first_text(&first), first_text(&second));
    assert_eq!(first_text(&second), Some("again"));

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn echo_without_text_is_rejected() -> Result<()> {
    let (client, server_task) = connect().await?;

    let missing = call_echo(&client, json!({})).await;
    assert!(missing.is_err(), "missing text must be rejected: {missing:?}");

    let wrong_type = call_echo(&client, json!({ "text": 42 })).await;
    assert!(wrong_type.is_err(), "non-string text must be rejected: {wrong_type:?}");

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}
