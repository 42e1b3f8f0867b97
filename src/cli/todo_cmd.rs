//! Todo command handlers
//!
//! One function per CLI command. Handlers receive the store and the
//! prompter explicitly, so tests can drive them with [`MemoryStore`] and
//! [`ScriptedPrompter`] doubles.

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::output::Output;
use super::prompt::Prompter;
use crate::domain::{Todo, TodoId, TodoStatus};
use crate::storage::TodoStore;

/// Table column content widths: ID, Title, Description, Status
const COLUMN_WIDTHS: [usize; 4] = [10, 20, 40, 15];

const TABLE_HEADER: [&str; 4] = ["ID", "Title", "Description", "Status"];

/// Status labels in select order
fn status_labels() -> Vec<&'static str> {
    TodoStatus::ALL.iter().map(|s| s.as_str()).collect()
}

/// Interactively collects the fields of a new todo and creates it
pub fn add_todo(
    store: &mut dyn TodoStore,
    prompter: &mut dyn Prompter,
    output: &Output,
) -> Result<()> {
    let title = prompter.ask_text("Enter the title of the todo you want to add", "")?;
    let description = prompter.ask_text("Enter a description of your todo", "")?;
    let labels = status_labels();
    let selected = prompter.ask_select("Select the status of the todo", &labels, 0)?;

    let todo = Todo::new(title, description, TodoStatus::ALL[selected]);

    // Creation is a single store call; a failure here leaves no partial record.
    store
        .create(&todo)
        .context("Failed to create your todo")?;

    if output.is_json() {
        output.data(&todo);
    } else {
        output.success(&format!(
            "Todo has been successfully created (ID: {})",
            todo.id
        ));
    }

    Ok(())
}

/// Lists every todo, or just the one with the given id
pub fn list_todos(store: &dyn TodoStore, output: &Output, id: Option<&TodoId>) -> Result<()> {
    let todos: Vec<Todo> = match id {
        // A missing id is an empty listing, not an error.
        Some(id) => store
            .get(id)
            .context("Failed to fetch your todo")?
            .into_iter()
            .collect(),
        None => store.list().context("Failed to fetch todos")?,
    };

    if output.is_json() {
        output.data(&todos);
        return Ok(());
    }

    if todos.is_empty() {
        output.notice("No todos found.");
    } else {
        print!("{}", render_table(&todos));
    }

    Ok(())
}

/// Re-prompts every field of an existing todo and overwrites it in place
pub fn update_todo(
    store: &mut dyn TodoStore,
    prompter: &mut dyn Prompter,
    output: &Output,
    id: &TodoId,
) -> Result<()> {
    let existing = match store.get(id).context("Failed to fetch your todo")? {
        Some(todo) => todo,
        None => {
            output.notice(&format!("Todo with ID {} not found.", id));
            return Ok(());
        }
    };

    let title = prompter.ask_text("Enter the new title", &existing.title)?;
    let description = prompter.ask_text("Enter the new description", &existing.description)?;
    let labels = status_labels();
    let selected =
        prompter.ask_select("Select the new status", &labels, existing.status.select_index())?;

    let updated = Todo {
        id: existing.id,
        title,
        description,
        status: TodoStatus::ALL[selected],
    };

    if !store.update(&updated).context("Failed to update your todo")? {
        output.notice(&format!("Todo with ID {} not found.", id));
        return Ok(());
    }

    output.success("Todo updated successfully!");
    Ok(())
}

/// Deletes a single todo after confirmation
pub fn delete_todo(
    store: &mut dyn TodoStore,
    prompter: &mut dyn Prompter,
    output: &Output,
    id: &TodoId,
) -> Result<()> {
    let todo = match store.get(id).context("Failed to fetch your todo")? {
        Some(todo) => todo,
        None => {
            output.notice(&format!("Todo with ID {} not found.", id));
            return Ok(());
        }
    };

    let confirmed = prompter.ask_confirm(
        &format!("Are you sure you want to delete todo \"{}\"?", todo.title),
        false,
    )?;

    if !confirmed {
        output.notice("Delete operation cancelled.");
        return Ok(());
    }

    store.delete(id).context("Failed to delete your todo")?;
    output.success("Todo deleted successfully!");
    Ok(())
}

/// Deletes every todo after confirmation
pub fn delete_all_todos(
    store: &mut dyn TodoStore,
    prompter: &mut dyn Prompter,
    output: &Output,
) -> Result<()> {
    let confirmed = prompter.ask_confirm(
        "Are you sure you want to delete ALL todos? This cannot be undone.",
        false,
    )?;

    if !confirmed {
        output.notice("Delete operation cancelled.");
        return Ok(());
    }

    let removed = store.delete_all().context("Failed to delete todos")?;
    output.success(&format!(
        "All todos deleted successfully! ({} removed)",
        removed
    ));
    Ok(())
}

/// Prints the static command list; never touches the store
pub fn help() {
    println!("{}", "Available commands:".blue());
    let commands = [
        ("add-todo", "Add a new todo"),
        ("list-todos", "List all todos or a specific todo"),
        ("update-todo", "Update a todo"),
        ("delete-todo", "Delete a specific todo"),
        ("delete-all-todos", "Delete all todos"),
    ];
    for (name, description) in commands {
        // Pad before coloring so the escape codes do not skew the column.
        let label = format!("{:<18}", name);
        println!("{}- {}", label.green(), description);
    }
}

/// Color used for a status cell
fn status_color(status: TodoStatus) -> Color {
    match status {
        TodoStatus::Done => Color::Green,
        TodoStatus::InProgress => Color::Blue,
        _ => Color::Yellow,
    }
}

/// Truncates and pads `text` to exactly `width` display columns
///
/// Over-wide text is cut and terminated with an ellipsis; wide (CJK etc.)
/// characters are measured, not counted.
fn fit_cell(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{}{}", out, " ".repeat(width - used))
}

/// Renders todos as a bordered table with fixed column widths
fn render_table(todos: &[Todo]) -> String {
    let mut out = String::new();

    let border: String = {
        let mut b = String::from("+");
        for width in COLUMN_WIDTHS {
            b.push_str(&"-".repeat(width + 2));
            b.push('+');
        }
        b.push('\n');
        b
    };

    out.push_str(&border);
    out.push_str(&format!(
        "| {} | {} | {} | {} |\n",
        fit_cell(TABLE_HEADER[0], COLUMN_WIDTHS[0]),
        fit_cell(TABLE_HEADER[1], COLUMN_WIDTHS[1]),
        fit_cell(TABLE_HEADER[2], COLUMN_WIDTHS[2]),
        fit_cell(TABLE_HEADER[3], COLUMN_WIDTHS[3]),
    ));
    out.push_str(&border);

    for todo in todos {
        let status_cell = fit_cell(todo.status.as_str(), COLUMN_WIDTHS[3])
            .color(status_color(todo.status))
            .to_string();
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            fit_cell(todo.id.as_str(), COLUMN_WIDTHS[0]),
            fit_cell(&todo.title, COLUMN_WIDTHS[1]),
            fit_cell(&todo.description, COLUMN_WIDTHS[2]),
            status_cell,
        ));
    }

    out.push_str(&border);
    out
}
