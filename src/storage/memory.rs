//! In-memory todo store
//!
//! Mirrors [`SqliteStore`](super::SqliteStore) semantics without touching
//! disk. Used by the handler unit tests; listing order is insertion order,
//! which is as "store-defined" as any other.

use super::{StoreError, TodoStore};
use crate::domain::{Todo, TodoId};

/// In-memory store backed by a plain vector
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: Vec<Todo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of todos currently held
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl TodoStore for MemoryStore {
    fn create(&mut self, todo: &Todo) -> Result<(), StoreError> {
        if self.todos.iter().any(|t| t.id == todo.id) {
            return Err(StoreError::DuplicateId(todo.id.clone()));
        }
        self.todos.push(todo.clone());
        Ok(())
    }

    fn get(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.iter().find(|t| &t.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.clone())
    }

    fn update(&mut self, todo: &Todo) -> Result<bool, StoreError> {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => {
                *existing = todo.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &TodoId) -> Result<bool, StoreError> {
        let before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        Ok(self.todos.len() < before)
    }

    fn delete_all(&mut self) -> Result<usize, StoreError> {
        let removed = self.todos.len();
        self.todos.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoStatus;

    #[test]
    fn behaves_like_a_store() {
        let mut store = MemoryStore::new();
        let todo = Todo::new("Buy milk", "2%", TodoStatus::Todo);

        store.create(&todo).unwrap();
        assert!(matches!(
            store.create(&todo),
            Err(StoreError::DuplicateId(_))
        ));

        assert_eq!(store.get(&todo.id).unwrap().unwrap(), todo);
        assert_eq!(store.list().unwrap().len(), 1);

        assert!(store.delete(&todo.id).unwrap());
        assert!(!store.delete(&todo.id).unwrap());
        assert!(store.is_empty());
    }
}
