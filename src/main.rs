//! Entry point for the to-do MCP server.
use std::process::ExitCode;

use clap::Parser;
use todo_mcp::{
    cli::{LaunchProfile, LaunchProfileArgs},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{self, RuntimeExit},
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = LaunchProfileArgs::parse()
        .build()
        .map_err(RuntimeExit::from_error)?;
    run_server(profile).await
}

async fn run_server(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let config = ServerConfig::load(
        profile.config_path.clone(),
        profile.config_source.is_required(),
    )
    .map_err(RuntimeExit::from_error)?;
    runtime::run_server(profile, config).await
}
