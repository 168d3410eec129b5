//! Todo persistence.
//!
//! # Tables
//!
//! - `todos` - One row per todo, keyed by a `SERIAL` id, indexed by
//!   `(user_id, created_at DESC)` for newest-first listing
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p slack-todo-cli -- migrate
//! ```

pub mod memory;
pub mod todos;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use slack_todo_core::{SlackUserId, TaskText, Todo, TodoId};

pub use memory::InMemoryTodoStore;
pub use todos::PgTodoStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested todo was not found for this owner.
    #[error("not found")]
    NotFound,
}

/// Persistence operations the command handlers depend on.
///
/// Every lookup and mutation is scoped by owner so one user can never read
/// or complete another user's todo.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a pending todo and return it with its assigned id.
    async fn create(&self, owner: &SlackUserId, task: &TaskText) -> Result<Todo, StoreError>;

    /// Find a todo by id, only if `owner` owns it.
    async fn find_for_owner(
        &self,
        id: TodoId,
        owner: &SlackUserId,
    ) -> Result<Option<Todo>, StoreError>;

    /// Mark a todo completed.
    ///
    /// Returns [`StoreError::NotFound`] if no todo with this id belongs to `owner`.
    async fn mark_completed(&self, id: TodoId, owner: &SlackUserId) -> Result<Todo, StoreError>;

    /// All todos of `owner`, newest first.
    async fn list_by_owner(&self, owner: &SlackUserId) -> Result<Vec<Todo>, StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
