//! Composition root: builds the object graph by plain constructor calls.
//!
//! The store and repository live as long as the [`TodoApp`]; each screen
//! gets its own [`TodoViewModel`] through [`TodoApp::view_model`].

use crate::config::AppConfig;
use crate::todo::{
    adapters::{StoreBackedTodoRepository, memory::InMemoryTodoStore, sqlite::SqliteTodoStore},
    ports::{TodoStore, TodoStoreError},
    presentation::TodoViewModel,
    services::TodoUseCases,
};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The database could not be opened or prepared.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
}

/// View model type produced by [`TodoApp::view_model`].
pub type AppViewModel<S> = TodoViewModel<StoreBackedTodoRepository<S>, DefaultClock>;

/// Long-lived application services.
pub struct TodoApp<S>
where
    S: TodoStore + 'static,
{
    repository: Arc<StoreBackedTodoRepository<S>>,
    clock: Arc<DefaultClock>,
}

impl<S> TodoApp<S>
where
    S: TodoStore + 'static,
{
    /// Wires the application around an existing store.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            repository: Arc::new(StoreBackedTodoRepository::new(Arc::new(store))),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Returns the shared repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<StoreBackedTodoRepository<S>> {
        &self.repository
    }

    /// Creates a state container for one screen.
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn view_model(&self) -> AppViewModel<S> {
        let use_cases = TodoUseCases::from_repository(Arc::clone(&self.repository));
        TodoViewModel::new(use_cases, Arc::clone(&self.clock))
    }
}

impl TodoApp<SqliteTodoStore> {
    /// Opens the configured database and wires the application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the database cannot be opened.
    pub fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let store = SqliteTodoStore::connect(&config.database_url, config.pool_size)?;
        Ok(Self::with_store(store))
    }
}

impl TodoApp<InMemoryTodoStore> {
    /// Wires the application around a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(InMemoryTodoStore::new())
    }
}
