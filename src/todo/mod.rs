//! To-do list management.
//!
//! A single local list of todos with create, read, update and delete,
//! persisted on-device and kept live in a state container. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]
//! - State container and view in [`presentation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;

#[cfg(test)]
mod tests;
