//! Todos: a local to-do list with a live, reactive state container.
//!
//! Todos are persisted in an on-device `SQLite` database. A live query
//! re-delivers the full list after every write, and a state container turns
//! that stream plus user events into one observable screen state.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and the repository
//! - **Adapters**: Concrete implementations of ports (`SQLite`, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: domain, ports, adapters, use cases and presentation
//! - [`app`]: constructor-based wiring of the object graph
//! - [`config`]: command-line and environment settings
//! - [`telemetry`]: tracing subscriber setup

pub mod app;
pub mod config;
pub mod telemetry;
pub mod todo;
