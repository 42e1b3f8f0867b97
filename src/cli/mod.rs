//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add-todo` | Interactively create a todo |
//! | `list-todos [-i <id>]` | Show all todos, or one by id |
//! | `update-todo -i <id>` | Re-prompt and overwrite a todo |
//! | `delete-todo -i <id>` | Delete one todo (with confirmation) |
//! | `delete-all-todos` | Delete everything (with confirmation) |
//! | `help` | Static command list |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable, colored
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod prompt;
mod todo_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
