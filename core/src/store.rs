//! Storage for todos.
//!
//! `TodoStore` is the seam the HTTP layer talks to; `InMemoryTodoStore` is
//! the production implementation. Stores do no locking of their own: reads
//! take `&self`, mutations take `&mut self`, and whoever shares a store
//! across threads wraps it in a lock.

use tracing::debug;

use crate::error::StoreError;
use crate::types::{Todo, TodoId, TodoPayload};

/// Operations the HTTP layer needs from a todo store.
pub trait TodoStore: Send + Sync + 'static {
    /// Every stored todo, in insertion order.
    fn get_all(&self) -> Vec<Todo>;

    /// The todo with `id`, or `None` if there is none.
    fn find_by_id(&self, id: TodoId) -> Option<Todo>;

    /// Insert a new todo and return it with its final id.
    ///
    /// The payload's id is used when present, otherwise the store assigns
    /// one. Fails with `Conflict` if the supplied id is already taken, and
    /// with `IdsExhausted` if no unused id is left to assign.
    fn save(&mut self, payload: TodoPayload) -> Result<Todo, StoreError>;

    /// Replace the fields of todo `id` with the payload's, keeping the id.
    fn update(&mut self, id: TodoId, payload: TodoPayload) -> Result<Todo, StoreError>;

    /// Remove todo `id` and return what was stored.
    fn delete_by_id(&mut self, id: TodoId) -> Result<Todo, StoreError>;
}

/// A `Vec`-backed store. Linear scans keep insertion order for free.
#[derive(Debug)]
pub struct InMemoryTodoStore {
    todos: Vec<Todo>,
    /// `None` once an id of `TodoId::MAX` has been used.
    next_id: Option<TodoId>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(1),
        }
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    fn find_by_id(&self, id: TodoId) -> Option<Todo> {
        self.todos.iter().find(|todo| todo.id == id).cloned()
    }

    fn save(&mut self, payload: TodoPayload) -> Result<Todo, StoreError> {
        let id = match payload.id {
            Some(id) if self.position(id).is_some() => return Err(StoreError::Conflict(id)),
            Some(id) => id,
            None => self.next_id.ok_or(StoreError::IdsExhausted)?,
        };
        // Auto-assigned ids stay above every id seen so far.
        self.next_id = match (self.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };

        let todo = payload.into_todo(id);
        self.todos.push(todo.clone());
        debug!(id, "saved todo");
        Ok(todo)
    }

    fn update(&mut self, id: TodoId, payload: TodoPayload) -> Result<Todo, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let todo = &mut self.todos[index];
        todo.apply(payload);
        debug!(id, "updated todo");
        Ok(todo.clone())
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<Todo, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let todo = self.todos.remove(index);
        debug!(id, "deleted todo");
        Ok(todo)
    }
}
