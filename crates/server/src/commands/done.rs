//! `/done <id>` - mark one of the caller's todos complete.

use tracing::debug;

use slack_todo_core::{SlackUserId, Todo, TodoId};

use crate::db::{StoreError, TodoStore};

/// Result of a `/done` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneOutcome {
    /// The todo is now completed.
    Completed(Todo),
    /// No id given.
    MissingId,
    /// The text is not an integer.
    InvalidId,
    /// No todo with that id belongs to the caller.
    ///
    /// Deliberately covers both "does not exist" and "belongs to someone
    /// else" so ids of other users cannot be probed.
    NotFound,
}

/// Complete the todo named by `text` if `owner` owns it.
///
/// # Errors
///
/// Returns the store error if a lookup or update fails.
pub async fn done(
    store: &dyn TodoStore,
    owner: &SlackUserId,
    text: &str,
) -> Result<DoneOutcome, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DoneOutcome::MissingId);
    }

    let Ok(id) = text.parse::<TodoId>() else {
        debug!("Non-numeric /done id");
        return Ok(DoneOutcome::InvalidId);
    };

    if store.find_for_owner(id, owner).await?.is_none() {
        return Ok(DoneOutcome::NotFound);
    }

    match store.mark_completed(id, owner).await {
        Ok(todo) => Ok(DoneOutcome::Completed(todo)),
        // Removed between lookup and update
        Err(StoreError::NotFound) => Ok(DoneOutcome::NotFound),
        Err(e) => Err(e),
    }
}
