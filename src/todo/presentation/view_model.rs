//! State container driving the todo screen.

use super::{TodoEvent, TodoUiState};
use crate::todo::{
    domain::Todo,
    ports::{TodoRepository, TodoRepositoryResult},
    services::TodoUseCases,
};
use futures::StreamExt;
use mockable::Clock;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Unidirectional state container for the todo screen.
///
/// Holds one observable [`TodoUiState`], keeps it in step with the live todo
/// list, and applies [`TodoEvent`]s by running use cases. Mutations never
/// touch `tasks` directly; their effect arrives through the live list.
///
/// Must be created inside a tokio runtime. Dropping the view model stops the
/// live-list observation; mutations already in flight still complete.
pub struct TodoViewModel<R, C>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    shared: Arc<Shared<R, C>>,
    observation: Mutex<Option<JoinHandle<()>>>,
}

struct Shared<R, C>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state: watch::Sender<TodoUiState>,
    use_cases: TodoUseCases<R>,
    clock: Arc<C>,
}

impl<R, C> TodoViewModel<R, C>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the view model and starts observing the live list.
    #[must_use]
    pub fn new(use_cases: TodoUseCases<R>, clock: Arc<C>) -> Self {
        let (state, _) = watch::channel(TodoUiState::initial());
        let view_model = Self {
            shared: Arc::new(Shared {
                state,
                use_cases,
                clock,
            }),
            observation: Mutex::new(None),
        };
        view_model.start_observing();
        view_model
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> TodoUiState {
        self.shared.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoUiState> {
        self.shared.state.subscribe()
    }

    /// Applies an event.
    ///
    /// Mutations run as independent tasks and their handles are returned so
    /// callers may await them. Events that are applied synchronously, or
    /// rejected because the title is blank, return `None`.
    pub fn handle_event(&self, event: TodoEvent) -> Option<JoinHandle<()>> {
        match event {
            TodoEvent::Add { title, description } => self.add_todo(&title, &description),
            TodoEvent::Update(todo) => Some(self.spawn_mutation("update todo", move |shared| {
                async move { shared.use_cases.update_todo.execute(&todo).await }
            })),
            TodoEvent::Delete(id) => Some(self.spawn_mutation("delete todo", move |shared| {
                async move { shared.use_cases.delete_todo.execute(id).await }
            })),
            TodoEvent::Reload => {
                self.reload();
                None
            }
            TodoEvent::DismissError => {
                self.shared.state.send_if_modified(|state| state.error.take().is_some());
                None
            }
        }
    }

    fn add_todo(&self, title: &str, description: &str) -> Option<JoinHandle<()>> {
        let title = title.trim();
        if title.is_empty() {
            debug!("ignoring todo with blank title");
            return None;
        }
        let todo = Todo::new(title, description.trim(), &*self.shared.clock);
        Some(self.spawn_mutation("add todo", move |shared| async move {
            shared.use_cases.add_todo.execute(&todo).await.map(|_| ())
        }))
    }

    fn spawn_mutation<F, Fut>(&self, action: &'static str, operation: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<Shared<R, C>>) -> Fut + Send + 'static,
        Fut: Future<Output = TodoRepositoryResult<()>> + Send + 'static,
    {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            match operation(Arc::clone(&shared)).await {
                Ok(()) => {
                    shared.state.send_if_modified(|state| state.error.take().is_some());
                }
                Err(err) => {
                    warn!(error = %err, "failed to {action}");
                    let message = format!("failed to {action}: {err}");
                    shared.state.send_modify(|state| state.error = Some(message));
                }
            }
        })
    }

    fn reload(&self) {
        self.shared.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        self.start_observing();
    }

    fn start_observing(&self) {
        let task = tokio::spawn(observe(Arc::clone(&self.shared)));
        let previous = self
            .observation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

impl<R, C> Drop for TodoViewModel<R, C>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn drop(&mut self) {
        let observation = self
            .observation
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = observation {
            task.abort();
        }
    }
}

async fn observe<R, C>(shared: Arc<Shared<R, C>>)
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut todos = shared.use_cases.get_todos.execute();
    while let Some(snapshot) = todos.next().await {
        match snapshot {
            Ok(tasks) => shared.state.send_modify(|state| {
                state.tasks = tasks;
                state.is_loading = false;
                state.error = None;
            }),
            Err(err) => {
                warn!(error = %err, "todo list observation failed");
                let message = format!("failed to load todos: {err}");
                shared.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(message);
                });
                return;
            }
        }
    }
}
