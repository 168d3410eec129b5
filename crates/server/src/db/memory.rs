//! In-process todo store for tests and local runs without `PostgreSQL`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use slack_todo_core::{SlackUserId, TaskText, Todo, TodoId};

use super::{StoreError, TodoStore};

/// Todo store that keeps everything in memory.
///
/// Ids are assigned sequentially from 1, mirroring a `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    todos: Vec<Todo>,
}

impl InMemoryTodoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos across all owners.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    /// Returns `true` if no todos are stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.todos.is_empty()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, owner: &SlackUserId, task: &TaskText) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;

        let todo = Todo {
            id: TodoId::new(inner.last_id),
            owner: owner.clone(),
            task: task.as_str().to_owned(),
            completed: false,
            created_at: Utc::now(),
        };
        inner.todos.push(todo.clone());

        Ok(todo)
    }

    async fn find_for_owner(
        &self,
        id: TodoId,
        owner: &SlackUserId,
    ) -> Result<Option<Todo>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .todos
            .iter()
            .find(|t| t.id == id && t.is_owned_by(owner))
            .cloned())
    }

    async fn mark_completed(&self, id: TodoId, owner: &SlackUserId) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id && t.is_owned_by(owner))
            .ok_or(StoreError::NotFound)?;

        todo.completed = true;
        Ok(todo.clone())
    }

    async fn list_by_owner(&self, owner: &SlackUserId) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.lock().await;
        let mut todos: Vec<Todo> = inner
            .todos
            .iter()
            .filter(|t| t.is_owned_by(owner))
            .cloned()
            .collect();

        todos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_i32().cmp(&a.id.as_i32()))
        });

        Ok(todos)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
