//! todo-cli - A simple command-line application for managing todos
//!
//! Todos live in a local SQLite database. Commands are driven by flags and
//! interactive prompts; everything on stdin/stdout goes through small
//! capability seams ([`cli::Prompter`], [`storage::TodoStore`]) so the whole
//! command surface is testable without a terminal.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Todo, TodoId, TodoStatus};
