//! `PostgreSQL`-backed todo store.
//!
//! Queries are checked at runtime (`sqlx::query_as`) so the crate builds
//! without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use slack_todo_core::{SlackUserId, TaskText, Todo, TodoId};

use super::{StoreError, TodoStore};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` todo queries.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i32,
    user_id: String,
    task: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = StoreError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let owner = SlackUserId::parse(&row.user_id).map_err(|e| {
            StoreError::DataCorruption(format!("invalid user id in database: {e}"))
        })?;

        Ok(Self {
            id: TodoId::new(row.id),
            owner,
            task: row.task,
            completed: row.completed,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// Todo store over a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Create a new store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    #[instrument(skip(self, task))]
    async fn create(&self, owner: &SlackUserId, task: &TaskText) -> Result<Todo, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r"
            INSERT INTO todos (user_id, task)
            VALUES ($1, $2)
            RETURNING id, user_id, task, completed, created_at
            ",
        )
        .bind(owner)
        .bind(task.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    #[instrument(skip(self))]
    async fn find_for_owner(
        &self,
        id: TodoId,
        owner: &SlackUserId,
    ) -> Result<Option<Todo>, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r"
            SELECT id, user_id, task, completed, created_at
            FROM todos
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    #[instrument(skip(self))]
    async fn mark_completed(&self, id: TodoId, owner: &SlackUserId) -> Result<Todo, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r"
            UPDATE todos
            SET completed = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, task, completed, created_at
            ",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StoreError::NotFound)?.try_into()
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner: &SlackUserId) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r"
            SELECT id, user_id, task, completed, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
