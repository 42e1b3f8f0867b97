//! Persistence for todos
//!
//! The [`TodoStore`] trait is the seam between the command handlers and the
//! database: handlers receive an explicit `&mut dyn TodoStore` instead of
//! reaching for a process-wide client. [`SqliteStore`] is the production
//! implementation; [`MemoryStore`] backs the handler unit tests.

mod memory;
mod sqlite;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Todo, TodoId};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A todo with ID {0} already exists")]
    DuplicateId(TodoId),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to create store directory {0}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CRUD operations over the todo collection
///
/// One invariant holds for every implementation: a persisted todo has a
/// non-empty id, unique across the store. `list` order is store-defined and
/// carries no stability guarantee.
pub trait TodoStore {
    /// Inserts a new todo. Fails with [`StoreError::DuplicateId`] if the id
    /// is already taken.
    fn create(&mut self, todo: &Todo) -> Result<(), StoreError>;

    /// Fetches one todo by id; absence is `Ok(None)`, not an error.
    fn get(&self, id: &TodoId) -> Result<Option<Todo>, StoreError>;

    /// Fetches every todo, in store-defined order.
    fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Overwrites title, description and status of the todo with the given
    /// id. Returns false if no such todo exists.
    fn update(&mut self, todo: &Todo) -> Result<bool, StoreError>;

    /// Removes one todo by id. Returns false if no such todo exists.
    fn delete(&mut self, id: &TodoId) -> Result<bool, StoreError>;

    /// Removes every todo in one bulk call, returning the number removed.
    fn delete_all(&mut self) -> Result<usize, StoreError>;
}
