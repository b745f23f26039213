//! Error types for store operations.
//!
//! A missing id is an ordinary outcome of a lookup and is returned as `None`
//! by `find_by_id`. Mutations that need an existing entity report it as
//! `StoreError::NotFound` instead.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with this id exists.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// A caller-supplied id on create is already taken.
    #[error("todo {0} already exists")]
    Conflict(TodoId),

    /// Every id above the largest one ever stored is used up.
    #[error("no todo ids left to assign")]
    IdsExhausted,
}
