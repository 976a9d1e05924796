//! Port contracts for the to-do list.
//!
//! [`store`] is the access layer over the persisted table; [`repository`]
//! is the domain-facing contract the use cases depend on.

pub mod repository;
pub mod store;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoStream};
pub use store::{TodoRecord, TodoRecordStream, TodoStore, TodoStoreError, TodoStoreResult};
