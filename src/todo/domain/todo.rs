//! Todo record and related construction types.

use super::TodoId;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::Serialize;

/// Precision, in fractional-second digits, retained for creation timestamps.
const TIMESTAMP_PRECISION: u16 = 3;

/// A single to-do item.
///
/// The identifier and creation timestamp are fixed once the todo exists;
/// title, description and completion are replaced by copying the todo with
/// the `with_*` methods and persisting the copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, possibly empty.
    pub description: String,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a todo that has not been persisted yet.
    ///
    /// The creation timestamp is taken from `clock` at millisecond precision,
    /// which is the resolution storage keeps.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: TodoId::UNASSIGNED,
            title: title.into(),
            description: description.into(),
            is_completed: false,
            created_at: clock.utc().trunc_subsecs(TIMESTAMP_PRECISION),
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            is_completed: data.is_completed,
            created_at: data.created_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with the title replaced.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Returns a copy with the description replaced.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    /// Returns a copy with the completion flag replaced.
    #[must_use]
    pub fn with_completed(self, is_completed: bool) -> Self {
        Self {
            is_completed,
            ..self
        }
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn toggled(self) -> Self {
        let is_completed = !self.is_completed;
        self.with_completed(is_completed)
    }
}
