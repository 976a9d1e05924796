//! `SQLite` adapters for todo persistence.

mod models;
mod schema;
mod store;

pub use store::{SqliteTodoStore, TodoSqlitePool};
