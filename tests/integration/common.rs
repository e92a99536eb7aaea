use std::{io, path::PathBuf, process::Stdio};

use anyhow::{anyhow, Context, Result};
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
    service::RunningService,
    RoleClient, ServiceExt,
};
use serde_json::Value;
use tokio::{
    io::{AsyncRead, AsyncReadExt, AsyncWrite, ReadBuf},
    process::{Child, ChildStdin, ChildStdout, Command},
    task::JoinHandle,
};

use todo_mcp::server::{config::ServerConfig, runtime::TodoServer};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_todo-mcp");

pub async fn spawn_server_process() -> Result<(Child, ChildIoBridge, Option<JoinHandle<()>>)> {
    let mut command = Command::new(BINARY_PATH);
    command
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_valid.toml"),
        )
        .stdout(Stdio::piped())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = command.spawn().context("failed to spawn server process")?;
    let stdout = child.stdout.take().expect("child stdout");
    let stdin = child.stdin.take().expect("child stdin");
    let bridge = ChildIoBridge::new(stdout, stdin);
    let stderr_handle = child.stderr.take().map(|mut stderr| {
        tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
        })
    });
    Ok((child, bridge, stderr_handle))
}

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Server and client connected over an in-memory duplex pipe.
pub struct InProcessSession {
    pub client: RunningService<RoleClient, ClientInfo>,
    server_task: JoinHandle<Result<()>>,
}

impl InProcessSession {
    pub async fn start() -> Result<Self> {
        let config = ServerConfig::load_from_path(PathBuf::from(fixture(
            "tests/fixtures/config_valid.toml",
        )))?;
        let server = TodoServer::new(config, "integration".into());
        let (server_transport, client_transport) = tokio::io::duplex(4096);
        let server_task = tokio::spawn(async move {
            server.serve(server_transport).await?.waiting().await?;
            Result::<_, anyhow::Error>::Ok(())
        });
        let client = serve_client(ClientInfo::default(), client_transport).await?;
        Ok(Self {
            client,
            server_task,
        })
    }

    /// Call a tool and return its first text content block.
    pub async fn call_text(&self, name: &'static str, arguments: Value) -> Result<String> {
        let result = self
            .client
            .call_tool(CallToolRequestParam {
                name: name.into(),
                arguments: arguments.as_object().cloned(),
            })
            .await?;
        result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone())
            .ok_or_else(|| anyhow!("{name} returned no text content: {result:?}"))
    }

    /// Call a tool and return its structured content.
    pub async fn call_structured(&self, name: &'static str, arguments: Value) -> Result<Value> {
        let result = self
            .client
            .call_tool(CallToolRequestParam {
                name: name.into(),
                arguments: arguments.as_object().cloned(),
            })
            .await?;
        result
            .structured_content
            .ok_or_else(|| anyhow!("{name} returned no structured content"))
    }

    pub async fn shutdown(self) -> Result<()> {
        let _ = self.client.cancel().await;
        let _ = self.server_task.await;
        Ok(())
    }
}

pub struct ChildIoBridge {
    stdout: ChildStdout,
    stdin: ChildStdin,
}

impl ChildIoBridge {
    pub fn new(stdout: ChildStdout, stdin: ChildStdin) -> Self {
        Self { stdout, stdin }
    }
}

impl AsyncRead for ChildIoBridge {
    fn poll_read(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        std::pin::Pin::new(&mut self.stdout).poll_read(cx, buf)
    }
}

impl AsyncWrite for ChildIoBridge {
    fn poll_write(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
        data: &[u8],
    ) -> std::task::Poll<io::Result<usize>> {
        std::pin::Pin::new(&mut self.stdin).poll_write(cx, data)
    }

    fn poll_flush(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        std::pin::Pin::new(&mut self.stdin).poll_flush(cx)
    }

    fn poll_shutdown(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        std::pin::Pin::new(&mut self.stdin).poll_shutdown(cx)
    }
}
