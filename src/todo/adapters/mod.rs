//! Adapter implementations for the to-do list ports.
//!
//! - [`sqlite`]: Diesel-backed store over an on-device database
//! - [`memory`]: in-process store for tests and throwaway sessions
//! - [`live`]: change notification shared by both stores
//! - [`repository`]: domain mapping on top of any store

pub mod live;
pub mod memory;
pub mod repository;
pub mod sqlite;

pub use repository::StoreBackedTodoRepository;
