//! Shared world state for todo list BDD scenarios.

use std::time::Duration;

use eyre::{WrapErr, eyre};
use rstest::fixture;
use todos::{
    app::{AppViewModel, TodoApp},
    todo::{
        adapters::memory::InMemoryTodoStore,
        domain::Todo,
        presentation::{ScreenAction, TodoScreen, TodoUiState},
    },
};

/// How long a step waits for the live list to catch up.
const SETTLE: Duration = Duration::from_secs(5);

/// View model type used by the BDD world.
pub type TestViewModel = AppViewModel<InMemoryTodoStore>;

/// Scenario world for todo list behaviour tests.
pub struct TodoListWorld {
    pub app: TodoApp<InMemoryTodoStore>,
    pub view_model: Option<TestViewModel>,
    pub screen: TodoScreen,
}

impl TodoListWorld {
    /// Creates a world around a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: TodoApp::in_memory(),
            view_model: None,
            screen: TodoScreen::new(),
        }
    }

    /// Opens the screen's view model and waits for the first snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not finish loading.
    pub fn open(&mut self) -> Result<(), eyre::Report> {
        let view_model = self.app.view_model();
        self.view_model = Some(view_model);
        self.settle(|state| !state.is_loading)?;
        Ok(())
    }

    /// Returns the open view model.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has opened the screen yet.
    pub fn view_model(&self) -> Result<&TestViewModel, eyre::Report> {
        self.view_model
            .as_ref()
            .ok_or_else(|| eyre!("todo screen has not been opened in scenario world"))
    }

    /// Waits until the screen state satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state does not settle in time.
    pub fn settle(
        &self,
        predicate: impl FnMut(&TodoUiState) -> bool,
    ) -> Result<TodoUiState, eyre::Report> {
        let mut states = self.view_model()?.subscribe();
        let settled = run_async(tokio::time::timeout(SETTLE, states.wait_for(predicate)))
            .wrap_err("todo list did not settle in time")?
            .wrap_err("view model closed while waiting")?
            .clone();
        Ok(settled)
    }

    /// Feeds one typed line to the screen and applies any resulting event.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen answers with a message instead of an
    /// event or prompt, or the spawned mutation panics.
    pub fn type_line(&mut self, line: &str) -> Result<ScreenAction, eyre::Report> {
        let state = self.view_model()?.state();
        let action = self.screen.handle_input(line, &state);
        match &action {
            ScreenAction::Emit(event) => {
                if let Some(handle) = self.view_model()?.handle_event(event.clone()) {
                    run_async(handle).wrap_err("mutation task failed")?;
                }
            }
            ScreenAction::Message(message) => {
                return Err(eyre!("screen rejected `{line}`: {message}"));
            }
            ScreenAction::Prompt(_) | ScreenAction::Render | ScreenAction::Quit => {}
        }
        Ok(action)
    }

    /// Finds a todo by title in the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if no todo carries that title.
    pub fn todo_titled(&self, title: &str) -> Result<Todo, eyre::Report> {
        self.view_model()?
            .state()
            .tasks
            .into_iter()
            .find(|todo| todo.title() == title)
            .ok_or_else(|| eyre!("no todo titled {title:?} in the list"))
    }
}

impl Default for TodoListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoListWorld {
    TodoListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
