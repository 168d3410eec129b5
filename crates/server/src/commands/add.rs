//! `/add <task>` - create a todo.

use tracing::debug;

use slack_todo_core::{SlackUserId, TaskText, Todo};

use crate::db::{StoreError, TodoStore};

/// Result of an `/add` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The todo was stored.
    Added(Todo),
    /// No task text after trimming; nothing was stored.
    MissingTask,
}

/// Create a todo for `owner` from the raw command text.
///
/// # Errors
///
/// Returns the store error if the insert fails.
pub async fn add(
    store: &dyn TodoStore,
    owner: &SlackUserId,
    text: &str,
) -> Result<AddOutcome, StoreError> {
    let Ok(task) = TaskText::parse(text) else {
        debug!("Empty /add text");
        return Ok(AddOutcome::MissingTask);
    };

    let todo = store.create(owner, &task).await?;
    debug!(todo_id = %todo.id, "Todo created");

    Ok(AddOutcome::Added(todo))
}
