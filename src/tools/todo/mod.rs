//! In-memory to-do list tools, the `todos://latest` resource, and the summary prompt.
pub mod list;
pub mod request;
pub mod store;

pub use list::{
    TodoChange, TodoError, TodoList, EMPTY_LIST_MESSAGE, INVALID_INDEX_MESSAGE,
    NO_ITEMS_PROMPT_MESSAGE, NO_LATEST_MESSAGE,
};
pub use request::{
    AddTodoRequest, DeleteTodoRequest, TodoChangeResponse, TodoChangeStatus, UpdateTodoRequest,
};
pub use store::TodoStore;

pub const LATEST_TODO_URI: &str = "todos://latest";
pub const LATEST_TODO_RESOURCE_NAME: &str = "get_latest_todo";
pub const SUMMARY_PROMPT_NAME: &str = "todo_summary_prompt";
