//! `/list` - show the caller's todos.

use slack_todo_core::{SlackUserId, Todo};

use crate::db::{StoreError, TodoStore};

/// Result of a `/list` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The caller has no todos at all.
    Empty,
    /// Todos split by status, each newest first.
    Listed {
        pending: Vec<Todo>,
        completed: Vec<Todo>,
    },
}

/// Fetch and partition the todos of `owner`.
///
/// # Errors
///
/// Returns the store error if the query fails.
pub async fn list(store: &dyn TodoStore, owner: &SlackUserId) -> Result<ListOutcome, StoreError> {
    let todos = store.list_by_owner(owner).await?;
    if todos.is_empty() {
        return Ok(ListOutcome::Empty);
    }

    let (completed, pending): (Vec<Todo>, Vec<Todo>) =
        todos.into_iter().partition(|t| t.completed);

    Ok(ListOutcome::Listed { pending, completed })
}
