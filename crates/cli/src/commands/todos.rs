//! Todo inspection commands.
//!
//! # Usage
//!
//! ```bash
//! todo-cli todos list --user U0123ABCD
//! ```

use thiserror::Error;

use slack_todo_core::{SlackUserId, SlackUserIdError};
use slack_todo_server::db::{self, PgTodoStore, StoreError, TodoStore};

use super::{MissingEnvVar, database_url};

/// Errors that can occur while inspecting todos.
#[derive(Debug, Error)]
pub enum TodosError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    #[error("Invalid Slack user ID: {0}")]
    InvalidUser(#[from] SlackUserIdError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Print every todo of `user`, newest first.
///
/// # Errors
///
/// Returns an error if the user ID is invalid or the database fails.
pub async fn list(user: &str) -> Result<(), TodosError> {
    let owner = SlackUserId::parse(user)?;
    let database_url = database_url()?;

    let pool = db::create_pool(&database_url).await?;
    let todos = PgTodoStore::new(pool).list_by_owner(&owner).await?;

    tracing::info!(count = todos.len(), user = %owner, "Loaded todos");

    #[allow(clippy::print_stdout)]
    for todo in &todos {
        println!(
            "{:>6}  [{}]  {}  {}",
            todo.id,
            todo.status(),
            todo.created_at.format("%Y-%m-%d %H:%M"),
            todo.task
        );
    }
    Ok(())
}
