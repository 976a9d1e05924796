//! In-memory todo store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::todo::{
    adapters::live::{ChangeNotifier, live_query},
    ports::{TodoRecord, TodoRecordStream, TodoStore, TodoStoreError, TodoStoreResult},
};

/// Thread-safe in-memory todo store.
///
/// Identifiers are assigned from a high-water mark, so a deleted identifier
/// is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    state: RwLock<InMemoryTodoState>,
    changes: Arc<ChangeNotifier>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    rows: BTreeMap<i64, TodoRecord>,
    last_id: i64,
}

impl InMemoryTodoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TodoStoreError {
    TodoStoreError::persistence(std::io::Error::other(err.to_string()))
}

fn ids_exhausted() -> TodoStoreError {
    TodoStoreError::persistence(std::io::Error::other("todo identifiers exhausted"))
}

/// Returns all rows newest first, ties broken by the higher identifier.
fn snapshot(state: &InMemoryTodoState) -> Vec<TodoRecord> {
    let mut rows: Vec<TodoRecord> = state.rows.values().cloned().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    rows
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    fn observe_all(&self) -> TodoRecordStream {
        let shared = Arc::clone(&self.shared);
        live_query(Arc::clone(&self.shared.changes), move || {
            let result = shared
                .state
                .read()
                .map_err(lock_error)
                .map(|state| snapshot(&state));
            std::future::ready(result)
        })
    }

    async fn get_by_id(&self, id: i64) -> TodoStoreResult<Option<TodoRecord>> {
        let state = self.shared.state.read().map_err(lock_error)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn insert(&self, record: &TodoRecord) -> TodoStoreResult<i64> {
        let id = {
            let mut state = self.shared.state.write().map_err(lock_error)?;
            let id = if record.id > 0 {
                record.id
            } else {
                state.last_id.checked_add(1).ok_or_else(ids_exhausted)?
            };
            state.last_id = state.last_id.max(id);
            state.rows.insert(id, TodoRecord { id, ..record.clone() });
            id
        };
        debug!(id, "inserted todo");
        self.shared.changes.notify();
        Ok(id)
    }

    async fn update(&self, record: &TodoRecord) -> TodoStoreResult<()> {
        let updated = {
            let mut state = self.shared.state.write().map_err(lock_error)?;
            state.rows.get_mut(&record.id).map(|row| {
                row.title.clone_from(&record.title);
                row.description.clone_from(&record.description);
                row.is_completed = record.is_completed;
            })
        };
        if updated.is_some() {
            debug!(id = record.id, "updated todo");
            self.shared.changes.notify();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> TodoStoreResult<()> {
        let removed = {
            let mut state = self.shared.state.write().map_err(lock_error)?;
            state.rows.remove(&id)
        };
        if removed.is_some() {
            debug!(id, "deleted todo");
            self.shared.changes.notify();
        }
        Ok(())
    }
}
