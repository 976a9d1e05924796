//! UI state and events for the todo screen.

use crate::todo::domain::{Todo, TodoId};

/// Observable state of the todo screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUiState {
    /// Todos as last emitted by the live list, newest first.
    pub tasks: Vec<Todo>,
    /// `true` until the live list has produced its first snapshot.
    pub is_loading: bool,
    /// Description of the most recent failure, if not yet cleared.
    pub error: Option<String>,
}

impl TodoUiState {
    /// State before the first live-list emission.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            tasks: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// Finds a todo in the current snapshot.
    #[must_use]
    pub fn task(&self, id: TodoId) -> Option<&Todo> {
        self.tasks.iter().find(|todo| todo.id() == id)
    }
}

impl Default for TodoUiState {
    fn default() -> Self {
        Self::initial()
    }
}

/// User intents applied by [`super::TodoViewModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    /// Create a todo. Blank titles are ignored.
    Add {
        /// Title as typed; surrounding whitespace is trimmed.
        title: String,
        /// Description as typed; surrounding whitespace is trimmed.
        description: String,
    },
    /// Replace a todo wholesale with this copy.
    Update(Todo),
    /// Remove a todo.
    Delete(TodoId),
    /// Re-subscribe to the live list.
    Reload,
    /// Clear the current error.
    DismissError,
}
