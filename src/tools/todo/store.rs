use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::list::{TodoChange, TodoError, TodoList};

/// Process-wide to-do list shared by every connection of one server.
///
/// Each operation takes the lock once, so index checks and the mutation
/// they guard cannot interleave with another caller.
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<Mutex<TodoList>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, item: String) -> String {
        let mut list = self.inner.lock().await;
        let message = list.add(item);
        info!(
            target: "todo_mcp::todo",
            length = list.len(),
            "Added to-do item"
        );
        message
    }

    pub async fn render(&self) -> String {
        self.inner.lock().await.render()
    }

    /// Returns the outcome together with the list length after the call.
    pub async fn update(
        &self,
        index: i64,
        new_item: String,
    ) -> (Result<TodoChange, TodoError>, usize) {
        let mut list = self.inner.lock().await;
        let outcome = list.update(index, new_item);
        log_change("update", index, &outcome, list.len());
        (outcome, list.len())
    }

    pub async fn delete(&self, index: i64) -> (Result<TodoChange, TodoError>, usize) {
        let mut list = self.inner.lock().await;
        let outcome = list.delete(index);
        log_change("delete", index, &outcome, list.len());
        (outcome, list.len())
    }

    pub async fn latest(&self) -> String {
        self.inner.lock().await.latest()
    }

    pub async fn summary_prompt(&self) -> String {
        self.inner.lock().await.summary_prompt()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

fn log_change(
    operation: &'static str,
    index: i64,
    outcome: &Result<TodoChange, TodoError>,
    length: usize,
) {
    match outcome {
        Ok(_) => info!(
            target: "todo_mcp::todo",
            operation,
            index,
            length,
            "Applied to-do change"
        ),
        Err(err) => debug!(
            target: "todo_mcp::todo",
            operation,
            index,
            length,
            reason = ?err,
            "Rejected to-do change"
        ),
    }
}
