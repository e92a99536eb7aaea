//! Name/description listing of every tool registered on the router.
use std::collections::BTreeMap;

use rmcp::model::Tool;

use super::ServerToolRouter;

pub const CATALOG_TOOL_ID: &str = "list_available_tools";
pub const MISSING_DESCRIPTION: &str = "No description.";

/// Tool name mapped to its declared description.
pub type ToolCatalog = BTreeMap<String, String>;

/// Build the catalog from the live router so newly registered tools show up without extra wiring.
pub fn list_tools<S>(router: &ServerToolRouter<S>) -> ToolCatalog
where
    S: Send + Sync + 'static,
{
    describe(&router.list_all())
}

pub fn describe(tools: &[Tool]) -> ToolCatalog {
    tools
        .iter()
        .map(|tool| {
            let description = tool
                .description
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(MISSING_DESCRIPTION);
            (tool.name.to_string(), description.to_string())
        })
        .collect()
}
