//! Repository implementation that maps access-layer records to domain todos.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use std::sync::Arc;

use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoDomainError, TodoId},
    ports::{
        TodoRecord, TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoStore,
        TodoStream,
    },
};

/// [`TodoRepository`] over any [`TodoStore`].
///
/// Holds no cached state: every call and every stream emission goes through
/// the store.
#[derive(Debug)]
pub struct StoreBackedTodoRepository<S>
where
    S: TodoStore,
{
    store: Arc<S>,
}

impl<S> StoreBackedTodoRepository<S>
where
    S: TodoStore,
{
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S> Clone for StoreBackedTodoRepository<S>
where
    S: TodoStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[async_trait]
impl<S> TodoRepository for StoreBackedTodoRepository<S>
where
    S: TodoStore + 'static,
{
    fn get_all_todos(&self) -> TodoStream {
        self.store
            .observe_all()
            .map(|snapshot| {
                snapshot
                    .map_err(TodoRepositoryError::from)
                    .and_then(|records| records.into_iter().map(record_to_todo).collect())
            })
            .boxed()
    }

    async fn get_todo_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let record = self.store.get_by_id(id.value()).await?;
        record.map(record_to_todo).transpose()
    }

    async fn add_todo(&self, todo: &Todo) -> TodoRepositoryResult<TodoId> {
        let raw_id = self.store.insert(&todo_to_record(todo)).await?;
        TodoId::new(raw_id).map_err(|source| TodoRepositoryError::CorruptRecord { id: raw_id, source })
    }

    async fn update_todo(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        Ok(self.store.update(&todo_to_record(todo)).await?)
    }

    async fn delete_todo(&self, id: TodoId) -> TodoRepositoryResult<()> {
        Ok(self.store.delete_by_id(id.value()).await?)
    }
}

fn todo_to_record(todo: &Todo) -> TodoRecord {
    TodoRecord {
        id: todo.id().value(),
        title: todo.title().to_owned(),
        description: todo.description().to_owned(),
        is_completed: todo.is_completed(),
        created_at: todo.created_at().timestamp_millis(),
    }
}

fn record_to_todo(record: TodoRecord) -> TodoRepositoryResult<Todo> {
    let TodoRecord {
        id: raw_id,
        title,
        description,
        is_completed,
        created_at: created_at_ms,
    } = record;

    let corrupt = |source: TodoDomainError| TodoRepositoryError::CorruptRecord { id: raw_id, source };
    let id = TodoId::new(raw_id).map_err(corrupt)?;
    let created_at = DateTime::<Utc>::from_timestamp_millis(created_at_ms)
        .ok_or(TodoDomainError::InvalidTimestamp(created_at_ms))
        .map_err(corrupt)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id,
        title,
        description,
        is_completed,
        created_at,
    }))
}
