//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use super::output::{Output, OutputFormat};
use super::prompt::TerminalPrompter;
use super::todo_cmd;
use crate::domain::TodoId;
use crate::storage::SqliteStore;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "A simple command line application for managing todos")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the SQLite database file
    #[arg(long, global = true, env = "TODO_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    AddTodo,

    /// List all todos or a specific todo
    ListTodos {
        /// ID of a specific todo
        #[arg(short = 'i', long)]
        id: Option<TodoId>,
    },

    /// Update a todo
    UpdateTodo {
        /// ID of the todo
        #[arg(short = 'i', long)]
        id: TodoId,
    },

    /// Delete a specific todo
    DeleteTodo {
        /// ID of the todo
        #[arg(short = 'i', long)]
        id: TodoId,
    },

    /// Delete all todos
    DeleteAllTodos,

    /// Show help information
    Help,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        // Pure presentation, runs without opening the store.
        Commands::Help => todo_cmd::help(),

        Commands::AddTodo => {
            let mut store = open_store(cli.db, &output)?;
            let mut prompter = TerminalPrompter::new();
            todo_cmd::add_todo(&mut store, &mut prompter, &output)?;
        }

        Commands::ListTodos { id } => {
            let store = open_store(cli.db, &output)?;
            todo_cmd::list_todos(&store, &output, id.as_ref())?;
        }

        Commands::UpdateTodo { id } => {
            let mut store = open_store(cli.db, &output)?;
            let mut prompter = TerminalPrompter::new();
            todo_cmd::update_todo(&mut store, &mut prompter, &output, &id)?;
        }

        Commands::DeleteTodo { id } => {
            let mut store = open_store(cli.db, &output)?;
            let mut prompter = TerminalPrompter::new();
            todo_cmd::delete_todo(&mut store, &mut prompter, &output, &id)?;
        }

        Commands::DeleteAllTodos => {
            let mut store = open_store(cli.db, &output)?;
            let mut prompter = TerminalPrompter::new();
            todo_cmd::delete_all_todos(&mut store, &mut prompter, &output)?;
        }
    }

    Ok(())
}

/// Opens the SQLite store at `--db`/`TODO_DB`, or the per-user data
/// directory when neither is set
fn open_store(db: Option<PathBuf>, output: &Output) -> Result<SqliteStore> {
    let db_path = match db {
        Some(path) => path,
        None => default_db_path()?,
    };

    output.verbose_ctx("store", &format!("Opening database at {}", db_path.display()));

    SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open todo database at {}", db_path.display()))
}

fn default_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "todo-cli")
        .context("Could not determine a data directory for the todo database")?;
    Ok(dirs.data_dir().join("todos.db"))
}
