//! todo-cli - manage todos from the command line

use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    if let Err(e) = todo_cli::cli::run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        eprintln!("{}", "Please check your input and try again.".yellow());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
