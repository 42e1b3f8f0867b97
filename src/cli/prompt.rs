//! Interactive prompting
//!
//! All user input flows through the [`Prompter`] trait so handlers never
//! touch stdin directly. [`TerminalPrompter`] is the production
//! implementation; [`ScriptedPrompter`] replays canned answers in tests.
//!
//! Prompts are written to stderr, keeping stdout reserved for command
//! output.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use colored::Colorize;

/// Capability interface for collecting user input
pub trait Prompter {
    /// Asks for free text. Empty input selects `initial`.
    fn ask_text(&mut self, message: &str, initial: &str) -> Result<String>;

    /// Asks the user to pick one of `options`, returning its index.
    /// Empty input selects `initial` (an index into `options`).
    fn ask_select(&mut self, message: &str, options: &[&str], initial: usize) -> Result<usize>;

    /// Asks a yes/no question. Empty input selects `initial`.
    fn ask_confirm(&mut self, message: &str, initial: bool) -> Result<bool>;
}

/// Interprets one line of confirm input; `None` means ask again
fn parse_confirm(input: &str, initial: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(initial),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interprets one line of select input as a 1-based choice; `None` means
/// ask again
fn parse_choice(input: &str, option_count: usize, initial: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Some(initial);
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= option_count => Some(n - 1),
        _ => None,
    }
}

/// Prompter backed by the real terminal (stderr prompts, stdin answers)
#[derive(Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Reads one line from stdin; EOF aborts the prompt
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            bail!("Prompt aborted: end of input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show(&self, prompt: &str) -> Result<()> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}", prompt)?;
        stderr.flush()?;
        Ok(())
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&mut self, message: &str, initial: &str) -> Result<String> {
        if initial.is_empty() {
            self.show(&format!("{} ", format!("{}:", message).bold()))?;
        } else {
            self.show(&format!(
                "{} {} ",
                format!("{}:", message).bold(),
                format!("[{}]", initial).dimmed()
            ))?;
        }

        let input = self.read_line()?;
        if input.trim().is_empty() {
            Ok(initial.to_string())
        } else {
            Ok(input)
        }
    }

    fn ask_select(&mut self, message: &str, options: &[&str], initial: usize) -> Result<usize> {
        self.show(&format!("{}\n", format!("{}:", message).bold()))?;
        for (i, option) in options.iter().enumerate() {
            let marker = if i == initial { "*" } else { " " };
            self.show(&format!(" {} {}) {}\n", marker, i + 1, option))?;
        }

        loop {
            self.show(&format!("Choice {} ", format!("[{}]", initial + 1).dimmed()))?;
            let input = self.read_line()?;
            if let Some(index) = parse_choice(&input, options.len(), initial) {
                return Ok(index);
            }
            self.show(&format!(
                "Please enter a number between 1 and {}.\n",
                options.len()
            ))?;
        }
    }

    fn ask_confirm(&mut self, message: &str, initial: bool) -> Result<bool> {
        let hint = if initial { "[Y/n]" } else { "[y/N]" };

        loop {
            self.show(&format!("{} {} ", message.bold(), hint.dimmed()))?;
            let input = self.read_line()?;
            if let Some(answer) = parse_confirm(&input, initial) {
                return Ok(answer);
            }
            self.show("Please answer 'y' or 'n'.\n")?;
        }
    }
}

/// Prompter that replays a fixed list of answers
///
/// Answers are exactly what a user would type: free text for `ask_text`, a
/// 1-based number for `ask_select`, `y`/`n` for `ask_confirm`, or an empty
/// string to take the default. Running out of answers, or answering a
/// select/confirm with something unparsable, is an error - scripted tests
/// are expected to be precise.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    fn next_answer(&mut self, message: &str) -> Result<String> {
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("No scripted answer left for prompt: {}", message),
        }
    }

    /// Returns true once every scripted answer has been consumed
    pub fn exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, message: &str, initial: &str) -> Result<String> {
        let answer = self.next_answer(message)?;
        if answer.trim().is_empty() {
            Ok(initial.to_string())
        } else {
            Ok(answer)
        }
    }

    fn ask_select(&mut self, message: &str, options: &[&str], initial: usize) -> Result<usize> {
        let answer = self.next_answer(message)?;
        match parse_choice(&answer, options.len(), initial) {
            Some(index) => Ok(index),
            None => bail!("Scripted select answer '{}' is not a valid choice", answer),
        }
    }

    fn ask_confirm(&mut self, message: &str, initial: bool) -> Result<bool> {
        let answer = self.next_answer(message)?;
        match parse_confirm(&answer, initial) {
            Some(value) => Ok(value),
            None => bail!("Scripted confirm answer '{}' is not yes/no", answer),
        }
    }
}
