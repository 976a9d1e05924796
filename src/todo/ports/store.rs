//! Access-layer port: typed queries over the persisted todo table.

use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Live sequence of full table snapshots, newest todo first.
pub type TodoRecordStream = BoxStream<'static, TodoStoreResult<Vec<TodoRecord>>>;

/// Storage-shaped todo row.
///
/// `id` is `0` before storage assigns one. `created_at` is a Unix timestamp
/// in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Row identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

/// Persistence contract for the todo table.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Observes every row ordered by `created_at` descending.
    ///
    /// The stream yields the current snapshot immediately and again after
    /// every write that changed at least one row. A failed snapshot query is
    /// yielded as an error and ends the stream; subscribing again restarts it.
    fn observe_all(&self) -> TodoRecordStream;

    /// Finds a row by identifier.
    ///
    /// Returns `None` when the row does not exist.
    async fn get_by_id(&self, id: i64) -> TodoStoreResult<Option<TodoRecord>>;

    /// Inserts a row and returns its identifier.
    ///
    /// A non-positive `id` asks storage to assign a fresh one. A positive
    /// `id` replaces any existing row with that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn insert(&self, record: &TodoRecord) -> TodoStoreResult<i64>;

    /// Replaces the mutable columns of the row matching `record.id`.
    ///
    /// Updating a missing row affects nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn update(&self, record: &TodoRecord) -> TodoStoreResult<()>;

    /// Deletes the row matching `record.id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn delete(&self, record: &TodoRecord) -> TodoStoreResult<()> {
        self.delete_by_id(record.id).await
    }

    /// Deletes the row with the given identifier, if present.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn delete_by_id(&self, id: i64) -> TodoStoreResult<()>;
}

/// Errors returned by todo store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
