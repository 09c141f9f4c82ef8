#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::Todo;

/// Client-side copy of the user's to-do list.
#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    pub loaded: bool,
}

impl TodosState {
    /// Replace the whole list from a fetch response.
    pub fn replace(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.loaded = true;
    }

    /// Append a newly created item.
    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Merge a server-updated item over the local copy with the same id.
    /// Unknown ids are ignored.
    pub fn apply(&mut self, updated: Todo) {
        if let Some(item) = self.items.iter_mut().find(|t| t.id == updated.id) {
            *item = updated;
        }
    }

    /// Drop the item with the given id, if present.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }
}
