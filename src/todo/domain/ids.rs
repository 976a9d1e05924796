//! Identifier type for the todo domain.

use super::TodoDomainError;
use serde::Serialize;
use std::fmt;

/// Storage-assigned identifier of a todo.
///
/// Identifiers are positive once a todo has been persisted. A todo that has
/// not reached storage yet carries [`TodoId::UNASSIGNED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Placeholder for todos that storage has not assigned an id to.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates a validated, storage-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TodoDomainError> {
        if value <= 0 {
            return Err(TodoDomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` once storage has assigned this identifier.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
