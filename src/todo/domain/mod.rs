//! Domain model for the to-do list.
//!
//! A todo is a plain record: an identifier assigned by storage, a title, a
//! free-text description, a completion flag and an immutable creation
//! timestamp. Infrastructure concerns stay outside this module.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use todo::{PersistedTodoData, Todo};
