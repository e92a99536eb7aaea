use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        AnnotateAble, ErrorData, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, ListResourcesResult, PaginatedRequestParam, Prompt, PromptMessage,
        PromptMessageRole, RawResource, ReadResourceRequestParam, ReadResourceResult, Resource,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, Json, RoleServer,
};
use serde_json::json;

use crate::{
    lib::{
        errors::{error_data, PROMPT_NOT_FOUND_ERROR, RESOURCE_NOT_FOUND_ERROR},
        telemetry::CallSpan,
    },
    server::config::ServerConfig,
    tools::{
        self,
        catalog::{self, ToolCatalog},
        media_plan::{self, MediaPlanRequest, MediaPlanResponse, MediaPlanStatus},
        todo::{
            AddTodoRequest, DeleteTodoRequest, TodoChangeResponse, TodoStore, UpdateTodoRequest,
            LATEST_TODO_RESOURCE_NAME, LATEST_TODO_URI, SUMMARY_PROMPT_NAME,
        },
        ServerToolRouter,
    },
};

#[derive(Clone)]
pub struct TodoServer {
    config: Arc<ServerConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
    todos: TodoStore,
}

impl TodoServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        Self::with_store(config, instructions, TodoStore::new())
    }

    /// Build a server around an existing list, e.g. to share it across TCP connections.
    pub fn with_store(config: ServerConfig, instructions: String, todos: TodoStore) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router: router,
            todos,
        }
    }

    pub fn todos(&self) -> &TodoStore {
        &self.todos
    }

    /// Names and descriptions of every registered tool.
    pub fn tool_catalog(&self) -> ToolCatalog {
        catalog::list_tools(&self.tool_router)
    }
}

#[tool_router(router = tool_router)]
impl TodoServer {
    #[tool(
        name = "add_todo",
        description = "Add a new to-do item to the in-memory list and confirm it was added."
    )]
    async fn add_todo(&self, Parameters(request): Parameters<AddTodoRequest>) -> String {
        self.todos.add(request.item).await
    }

    #[tool(
        name = "list_todos",
        description = "Retrieve the full list of current to-do items, numbered from 1."
    )]
    async fn list_todos(&self) -> String {
        self.todos.render().await
    }

    #[tool(
        name = "update_todo",
        description = "Update a to-do item by its 1-based index. An out-of-range index returns status `invalid_index` and leaves the list unchanged."
    )]
    async fn update_todo(
        &self,
        Parameters(request): Parameters<UpdateTodoRequest>,
    ) -> Result<Json<TodoChangeResponse>, ErrorData> {
        let span = CallSpan::start("update_todo");
        let (outcome, length) = self.todos.update(request.index, request.new_item).await;
        let response = TodoChangeResponse::from_outcome(outcome, length);
        span.finish(change_status(&response));
        Ok(Json(response))
    }

    #[tool(
        name = "delete_todo",
        description = "Delete a to-do item by its 1-based index; later items move up one position. An out-of-range index returns status `invalid_index` and leaves the list unchanged."
    )]
    async fn delete_todo(
        &self,
        Parameters(request): Parameters<DeleteTodoRequest>,
    ) -> Result<Json<TodoChangeResponse>, ErrorData> {
        let span = CallSpan::start("delete_todo");
        let (outcome, length) = self.todos.delete(request.index).await;
        let response = TodoChangeResponse::from_outcome(outcome, length);
        span.finish(change_status(&response));
        Ok(Json(response))
    }

    #[tool(
        name = "get_latest_todo",
        description = "Get the most recently added to-do item (same content as the todos://latest resource)."
    )]
    async fn get_latest_todo(&self) -> String {
        self.todos.latest().await
    }

    #[tool(
        name = "todo_summary_prompt",
        description = "Build an instruction asking an AI to summarize the current to-do items. The summary itself is not produced here."
    )]
    async fn todo_summary_prompt(&self) -> String {
        self.todos.summary_prompt().await
    }

    #[tool(
        name = "create_plan_media",
        description = "Generate a media plan from target users, budget, timeline, and preferred section (e.g. Sports, Actualité, Politique). All fields are required; when any is missing the response lists the questions to ask. Budget is always in Canadian dollars. Always respond in French."
    )]
    async fn create_plan_media(
        &self,
        Parameters(request): Parameters<MediaPlanRequest>,
    ) -> Result<Json<MediaPlanResponse>, ErrorData> {
        let span = CallSpan::start(media_plan::MEDIA_PLAN_TOOL_ID);
        let response = media_plan::create_plan(request);
        span.finish(match response.status {
            MediaPlanStatus::Complete => "complete",
            MediaPlanStatus::MissingFields => "missing_fields",
        });
        Ok(Json(response))
    }

    #[tool(
        name = "list_available_tools",
        description = "List all available MCP tools with their descriptions."
    )]
    async fn list_available_tools(&self) -> Result<Json<ToolCatalog>, ErrorData> {
        Ok(Json(self.tool_catalog()))
    }
}

fn change_status(response: &TodoChangeResponse) -> &'static str {
    if response.is_applied() {
        "applied"
    } else {
        "invalid_index"
    }
}

fn latest_todo_resource() -> Resource {
    let mut raw = RawResource::new(LATEST_TODO_URI, LATEST_TODO_RESOURCE_NAME);
    raw.description = Some("The most recently added to-do item.".into());
    raw.mime_type = Some("text/plain".into());
    raw.no_annotation()
}

fn summary_prompt() -> Prompt {
    Prompt::new(
        SUMMARY_PROMPT_NAME,
        Some("Ask the AI to summarize the current to-do list."),
        None,
    )
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TodoServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.server.name.clone();
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info,
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(vec![
            latest_todo_resource(),
        ]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let span = CallSpan::start("read_resource");
        if request.uri != LATEST_TODO_URI {
            span.finish("not_found");
            return Err(error_data(
                &RESOURCE_NOT_FOUND_ERROR,
                false,
                json!({ "uri": request.uri }),
            ));
        }
        let latest = self.todos.latest().await;
        span.finish("ok");
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(latest, request.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(vec![summary_prompt()]))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let span = CallSpan::start("get_prompt");
        if request.name != SUMMARY_PROMPT_NAME {
            span.finish("not_found");
            return Err(error_data(
                &PROMPT_NOT_FOUND_ERROR,
                false,
                json!({ "name": request.name }),
            ));
        }
        let text = self.todos.summary_prompt().await;
        span.finish("ok");
        Ok(GetPromptResult {
            description: Some("Summary request for the current to-do list.".into()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
