//! The todo entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SlackUserId, TodoId, TodoStatus};

/// A single todo owned by one Slack user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub owner: SlackUserId,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Typed view of the `completed` flag.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        if self.completed {
            TodoStatus::Completed
        } else {
            TodoStatus::Pending
        }
    }

    /// Returns `true` if `user` owns this todo.
    #[must_use]
    pub fn is_owned_by(&self, user: &SlackUserId) -> bool {
        &self.owner == user
    }
}
