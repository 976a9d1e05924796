//! Shared test helpers for in-memory application integration tests.

use std::time::Duration;

use rstest::fixture;
use todos::{
    app::{AppViewModel, TodoApp},
    todo::{
        adapters::memory::InMemoryTodoStore,
        presentation::{TodoEvent, TodoUiState},
    },
};
use tokio::sync::watch;

/// Upper bound on how long a test waits for the live list.
pub const WAIT: Duration = Duration::from_secs(5);

/// View model type used by the in-memory tests.
pub type TestViewModel = AppViewModel<InMemoryTodoStore>;

/// Provides a fresh application over an empty in-memory store.
#[fixture]
pub fn app() -> TodoApp<InMemoryTodoStore> {
    TodoApp::in_memory()
}

/// Waits until the state satisfies `predicate` and returns a copy of it.
///
/// # Errors
///
/// Returns an error if the state does not get there within [`WAIT`].
pub async fn wait_for(
    states: &mut watch::Receiver<TodoUiState>,
    predicate: impl FnMut(&TodoUiState) -> bool,
) -> Result<TodoUiState, eyre::Report> {
    let state = tokio::time::timeout(WAIT, states.wait_for(predicate))
        .await
        .map_err(|_| eyre::eyre!("state did not settle within {WAIT:?}"))??
        .clone();
    Ok(state)
}

/// Applies an event and waits for the mutation it spawns, if any.
///
/// # Errors
///
/// Returns an error if the mutation task panicked.
pub async fn apply(view_model: &TestViewModel, event: TodoEvent) -> Result<(), eyre::Report> {
    if let Some(handle) = view_model.handle_event(event) {
        handle.await?;
    }
    Ok(())
}

/// Builds an add event with an empty description.
#[must_use]
pub fn add(title: &str) -> TodoEvent {
    TodoEvent::Add {
        title: title.to_owned(),
        description: String::new(),
    }
}
