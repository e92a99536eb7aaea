use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "{name}: manage an in-memory to-do list (add_todo, list_todos, update_todo, delete_todo; indexes are 1-based), read todos://latest, request the todo_summary_prompt prompt, and collect media plans with create_plan_media. Loaded config {path}; serving in {transport} mode.",
        name = config.server.name,
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
    )
}
