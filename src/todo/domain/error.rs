//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The identifier is not a positive storage-assigned value.
    #[error("invalid todo identifier {0}, expected a positive integer")]
    InvalidId(i64),

    /// The creation timestamp is outside the representable range.
    #[error("invalid creation timestamp {0}ms")]
    InvalidTimestamp(i64),
}
