//! Domain types for the todo list.
//!
//! `Todo` is the stored entity. `TodoPayload` is what callers hand to the
//! store on create and update: the id is optional and only honored on create,
//! and the remaining fields overwrite the stored ones wholesale.

use serde::{Deserialize, Serialize};

/// Identifier of a stored todo. Unique within a store for its lifetime.
pub type TodoId = i64;

/// A single todo item as owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub order: i64,
}

/// Request payload for creating or replacing a todo.
///
/// `title` is required. `completed` and `order` fall back to `false` and `0`
/// when omitted, so an update always leaves the entity fully specified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: i64,
}

impl TodoPayload {
    pub fn new(title: impl Into<String>, completed: bool, order: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed,
            order,
        }
    }

    /// Same payload, but asking the store to use `id` on create.
    pub fn with_id(mut self, id: TodoId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            order: self.order,
        }
    }
}

impl Todo {
    /// Overwrite every field except `id` with the payload's values.
    pub(crate) fn apply(&mut self, payload: TodoPayload) {
        self.title = payload.title;
        self.completed = payload.completed;
        self.order = payload.order;
    }
}
