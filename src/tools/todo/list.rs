//! Ordered to-do list with 1-based external indexing.
use thiserror::Error;

pub const EMPTY_LIST_MESSAGE: &str = "Your to-do list is empty.";
pub const NO_LATEST_MESSAGE: &str = "No to-dos yet.";
pub const NO_ITEMS_PROMPT_MESSAGE: &str = "There are no to-do items.";
pub const INVALID_INDEX_MESSAGE: &str = "Invalid index.";

/// Failure returned by index-based mutations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Invalid index.")]
    OutOfRange { index: i64, length: usize },
}

/// Successful mutation of a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoChange {
    Updated {
        index: usize,
        old_item: String,
        new_item: String,
    },
    Deleted {
        index: usize,
        removed: String,
    },
}

impl TodoChange {
    /// Confirmation text shown to the caller.
    pub fn message(&self) -> String {
        match self {
            TodoChange::Updated {
                index,
                old_item,
                new_item,
            } => format!("Updated to-do {index}: '{old_item}' -> '{new_item}'"),
            TodoChange::Deleted { index, removed } => {
                format!("Deleted to-do {index}: '{removed}'")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Append an item. Empty strings and duplicates are kept as-is.
    pub fn add(&mut self, item: String) -> String {
        let message = format!("Added to-do: '{item}'");
        self.items.push(item);
        message
    }

    /// Numbered rendering, one item per line.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| format!("{}. {item}", idx + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn update(&mut self, index: i64, new_item: String) -> Result<TodoChange, TodoError> {
        let position = self.position(index)?;
        let old_item = std::mem::replace(&mut self.items[position], new_item.clone());
        Ok(TodoChange::Updated {
            index: position + 1,
            old_item,
            new_item,
        })
    }

    /// Remove an item; later items shift down by one position.
    pub fn delete(&mut self, index: i64) -> Result<TodoChange, TodoError> {
        let position = self.position(index)?;
        let removed = self.items.remove(position);
        Ok(TodoChange::Deleted {
            index: position + 1,
            removed,
        })
    }

    pub fn latest(&self) -> String {
        self.items
            .last()
            .cloned()
            .unwrap_or_else(|| NO_LATEST_MESSAGE.to_string())
    }

    /// Instruction text for a downstream summarizer. Nothing is summarized here.
    pub fn summary_prompt(&self) -> String {
        if self.items.is_empty() {
            return NO_ITEMS_PROMPT_MESSAGE.to_string();
        }
        format!(
            "Summarize the following to-do items: {}",
            self.items.join(", ")
        )
    }

    fn position(&self, index: i64) -> Result<usize, TodoError> {
        let out_of_range = TodoError::OutOfRange {
            index,
            length: self.items.len(),
        };
        let position = usize::try_from(index).map_err(|_| out_of_range)?;
        if position == 0 || position > self.items.len() {
            return Err(out_of_range);
        }
        Ok(position - 1)
    }
}
