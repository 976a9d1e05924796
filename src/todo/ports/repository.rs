//! Repository port exposing todos in domain shape.

use super::TodoStoreError;
use crate::todo::domain::{Todo, TodoDomainError, TodoId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Live sequence of the full todo list, newest first.
pub type TodoStream = BoxStream<'static, TodoRepositoryResult<Vec<Todo>>>;

/// Domain-facing todo persistence contract.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Observes all todos, newest first.
    ///
    /// Re-emits the complete list whenever storage changes.
    fn get_all_todos(&self) -> TodoStream;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn get_todo_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Persists a todo that has no durable identifier yet.
    ///
    /// Returns the identifier storage assigned.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Store`] when the write fails.
    async fn add_todo(&self, todo: &Todo) -> TodoRepositoryResult<TodoId>;

    /// Replaces the mutable fields of a persisted todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Store`] when the write fails.
    async fn update_todo(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Removes a todo by identifier. Missing todos are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Store`] when the write fails.
    async fn delete_todo(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] TodoStoreError),

    /// A stored row could not be mapped into a domain todo.
    #[error("corrupt todo record {id}: {source}")]
    CorruptRecord {
        /// Raw identifier of the offending row.
        id: i64,
        /// Domain validation failure.
        source: TodoDomainError,
    },
}
