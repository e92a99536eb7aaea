use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::list::{TodoChange, TodoError};

/// Input for `add_todo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoRequest {
    /// The task to be added to the list.
    pub item: String,
}

/// Input for `update_todo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoRequest {
    /// 1-based index of the item to update.
    pub index: i64,
    /// The new content for the task.
    pub new_item: String,
}

/// Input for `delete_todo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoRequest {
    /// 1-based index of the task to remove.
    pub index: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TodoChangeStatus {
    Updated,
    Deleted,
    InvalidIndex,
}

/// Response from `update_todo` and `delete_todo`.
///
/// An out-of-range index is a normal response with `status = "invalid_index"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TodoChangeResponse {
    pub status: TodoChangeStatus,
    pub message: String,
    /// Number of items after the call.
    pub length: usize,
}

impl TodoChangeResponse {
    pub fn from_outcome(outcome: Result<TodoChange, TodoError>, length: usize) -> Self {
        match outcome {
            Ok(change) => {
                let status = match change {
                    TodoChange::Updated { .. } => TodoChangeStatus::Updated,
                    TodoChange::Deleted { .. } => TodoChangeStatus::Deleted,
                };
                Self {
                    status,
                    message: change.message(),
                    length,
                }
            }
            Err(err) => Self {
                status: TodoChangeStatus::InvalidIndex,
                message: err.to_string(),
                length,
            },
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status != TodoChangeStatus::InvalidIndex
    }
}
