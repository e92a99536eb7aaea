//! Telemetry initialization and per-call span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, debug_span, info, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the stdio transport keeps stdout for protocol frames.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span recording one MCP tool, resource, or prompt invocation.
pub struct CallSpan {
    span: Span,
    started_at: Instant,
    operation: &'static str,
}

impl CallSpan {
    pub fn start(operation: &'static str) -> Self {
        let span = debug_span!(target: "todo_mcp::runtime", "mcp_call", operation);
        Self {
            span,
            started_at: Instant::now(),
            operation,
        }
    }

    /// Close the span, recording whether the call produced its normal result.
    pub fn finish(self, status: &'static str) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        debug!(
            target: "todo_mcp::runtime",
            operation = self.operation,
            status,
            elapsed_us,
            "Completed MCP call"
        );
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub server_name: &'a str,
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub config_path: &'a str,
    pub tool_count: usize,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "todo_mcp::runtime",
        server_name = telemetry.server_name,
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        config_path = telemetry.config_path,
        tool_count = telemetry.tool_count,
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
