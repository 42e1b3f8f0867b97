//! The todo record and its status

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::TodoId;

#[derive(Debug, Error, PartialEq)]
#[error("Unknown todo status: '{0}' (expected 'todo', 'in-progress' or 'done')")]
pub struct StatusParseError(pub String);

/// Status of a todo
///
/// Serialized (json and database) as `todo`, `in-progress`, `done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    /// All statuses, in prompt/select order
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Done];

    /// Stable string form, shared by the database column and the display layer
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }

    /// Position of this status within [`Self::ALL`]
    pub fn select_index(&self) -> usize {
        match self {
            TodoStatus::Todo => 0,
            TodoStatus::InProgress => 1,
            TodoStatus::Done => 2,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TodoStatus::Done)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "todo" => Ok(TodoStatus::Todo),
            "in-progress" => Ok(TodoStatus::InProgress),
            "done" => Ok(TodoStatus::Done),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// A single todo record
///
/// The store owns the durable copy; values of this type are transient
/// in-memory snapshots held for the duration of one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Generated at creation, immutable thereafter
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}

impl Todo {
    /// Creates a new todo with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TodoStatus,
    ) -> Self {
        let title = title.into();
        let id = TodoId::generate(&title, Utc::now());
        Self {
            id,
            title,
            description: description.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_gets_generated_id() {
        let todo = Todo::new("Buy milk", "2%", TodoStatus::Todo);
        assert!(!todo.id.as_str().is_empty());
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "2%");
        assert_eq!(todo.status, TodoStatus::Todo);
    }

    #[test]
    fn default_status_is_todo() {
        assert_eq!(TodoStatus::default(), TodoStatus::Todo);
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in TodoStatus::ALL {
            assert_eq!(status.as_str().parse::<TodoStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_strings() {
        assert!("doneish".parse::<TodoStatus>().is_err());
        assert!("".parse::<TodoStatus>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn select_index_matches_all_order() {
        for (i, status) in TodoStatus::ALL.iter().enumerate() {
            assert_eq!(status.select_index(), i);
        }
    }
}
