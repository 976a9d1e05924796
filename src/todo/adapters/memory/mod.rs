//! In-memory adapters for the to-do list.

mod store;

pub use store::InMemoryTodoStore;
