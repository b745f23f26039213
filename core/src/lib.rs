//! Domain core for the todo service.
//!
//! # Overview
//! Owns the `Todo` entity and the store that holds it. Nothing here knows
//! about HTTP: the server crate maps `StoreError` outcomes to status codes.
//!
//! # Design
//! - `TodoStore` is the capability trait the server depends on, so tests can
//!   substitute their own implementation.
//! - `InMemoryTodoStore` is constructed by its owner and passed in; there is
//!   no process-wide instance.
//! - Missing ids are values (`Option`, `StoreError`), never panics.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{InMemoryTodoStore, TodoStore};
pub use types::{Todo, TodoId, TodoPayload};
