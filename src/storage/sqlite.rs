//! SQLite-backed todo store
//!
//! A single `todos` table holds the whole collection. The schema is guarded
//! by `PRAGMA user_version`; a version mismatch drops and recreates the
//! table.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::{StoreError, TodoStore};
use crate::domain::{Todo, TodoId, TodoStatus};

/// SQLite store for todos
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Schema version - bump when the schema changes to force rebuild
    const SCHEMA_VERSION: i32 = 1;

    /// Creates or opens the database at the given path
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::CreateDir(PathBuf::from(parent), e))?;
            }
        }

        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let mut store = Self { conn };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Opens an in-memory database (tests)
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&mut self) -> Result<(), StoreError> {
        let current_version = self.schema_version()?;

        if current_version != Self::SCHEMA_VERSION {
            self.create_schema()?;
        }

        Ok(())
    }

    fn schema_version(&self) -> Result<i32, StoreError> {
        let result: Option<i32> = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .optional()?;

        Ok(result.unwrap_or(0))
    }

    fn create_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            DROP TABLE IF EXISTS todos;

            CREATE TABLE todos (
                id          TEXT PRIMARY KEY,
                title       TEXT NOT NULL,
                description TEXT NOT NULL,
                status      TEXT NOT NULL
            );
            ",
        )?;

        self.conn.execute(
            &format!("PRAGMA user_version = {}", Self::SCHEMA_VERSION),
            [],
        )?;

        Ok(())
    }
}

/// Maps one `todos` row to a [`Todo`], rejecting status strings that do not
/// name one of the three known variants.
fn row_to_todo(id: String, title: String, description: String, status: String) -> Result<Todo, StoreError> {
    let id: TodoId = id
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("{}", e)))?;
    let status: TodoStatus = status
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("{}", e)))?;

    Ok(Todo {
        id,
        title,
        description,
        status,
    })
}

impl TodoStore for SqliteStore {
    fn create(&mut self, todo: &Todo) -> Result<(), StoreError> {
        let result = self.conn.execute(
            "INSERT INTO todos (id, title, description, status) VALUES (?1, ?2, ?3, ?4)",
            params![
                todo.id.as_str(),
                todo.title,
                todo.description,
                todo.status.as_str(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateId(todo.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn get(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        let row: Option<(String, String, String, String)> = self
            .conn
            .query_row(
                "SELECT id, title, description, status FROM todos WHERE id = ?1",
                params![id.as_str()],
                |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                },
            )
            .optional()?;

        match row {
            Some((id, title, description, status)) => {
                Ok(Some(row_to_todo(id, title, description, status)?))
            }
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        // No ORDER BY: listing order is whatever the store returns.
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, description, status FROM todos")?;

        let rows: Vec<(String, String, String, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, title, description, status)| row_to_todo(id, title, description, status))
            .collect()
    }

    fn update(&mut self, todo: &Todo) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET title = ?1, description = ?2, status = ?3 WHERE id = ?4",
            params![
                todo.title,
                todo.description,
                todo.status.as_str(),
                todo.id.as_str(),
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&mut self, id: &TodoId) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id.as_str()])?;

        Ok(removed > 0)
    }

    fn delete_all(&mut self) -> Result<usize, StoreError> {
        let removed = self.conn.execute("DELETE FROM todos", [])?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoStatus;

    fn sample(title: &str) -> Todo {
        Todo::new(title, format!("{} description", title), TodoStatus::Todo)
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let todo = Todo::new("Buy milk", "2%", TodoStatus::Todo);
        store.create(&todo).unwrap();

        let fetched = store.get(&todo.id).unwrap().unwrap();
        assert_eq!(fetched, todo);
    }

    #[test]
    fn get_missing_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id: TodoId = "zzzzzzz".parse().unwrap();
        assert!(store.get(&id).unwrap().is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let todo = sample("one");
        store.create(&todo).unwrap();

        let err = store.create(&todo).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
    }

    #[test]
    fn update_overwrites_all_fields_and_keeps_id() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut todo = sample("draft");
        store.create(&todo).unwrap();

        todo.title = "final".to_string();
        todo.description = "edited".to_string();
        todo.status = TodoStatus::Done;
        assert!(store.update(&todo).unwrap());

        let fetched = store.get(&todo.id).unwrap().unwrap();
        assert_eq!(fetched.title, "final");
        assert_eq!(fetched.description, "edited");
        assert_eq!(fetched.status, TodoStatus::Done);
        assert_eq!(fetched.id, todo.id);
    }

    #[test]
    fn update_missing_reports_false() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let todo = sample("ghost");
        assert!(!store.update(&todo).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let keep = sample("keep");
        let drop = sample("drop");
        store.create(&keep).unwrap();
        store.create(&drop).unwrap();

        assert!(store.delete(&drop.id).unwrap());

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }

    #[test]
    fn delete_missing_reports_false() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id: TodoId = "missing".parse().unwrap();
        assert!(!store.delete(&id).unwrap());
    }

    #[test]
    fn delete_all_empties_the_store() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for i in 0..3 {
            store.create(&sample(&format!("todo {}", i))).unwrap();
        }

        assert_eq!(store.delete_all().unwrap(), 3);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("todos.db");
        let mut store = SqliteStore::open(&path).unwrap();
        store.create(&sample("persisted")).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn reopen_sees_persisted_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("todos.db");
        let todo = sample("durable");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.create(&todo).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get(&todo.id).unwrap().unwrap(), todo);
    }
}
