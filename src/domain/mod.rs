//! Core domain types: the todo record, its status, and its identifier

mod id;
mod todo;

pub use id::{IdError, TodoId};
pub use todo::{StatusParseError, Todo, TodoStatus};
