//! Todo identifiers
//!
//! Ids are short hex strings (e.g. `7f2b4c1`) derived from the title and the
//! creation timestamp, so the same title added at different times produces
//! different ids. Ids are generated once at creation and never change.
//!
//! Parsing is deliberately loose: any non-empty token is a valid `TodoId`,
//! because looking up an id that was never issued must come back as an empty
//! result, not a parse error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Todo ID cannot be empty")]
    Empty,
}

/// Unique identifier of a [`Todo`](crate::domain::Todo)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Number of hex characters in a generated id
    const GENERATED_LEN: usize = 7;

    /// Derives a fresh id from a title and a creation timestamp
    pub fn generate(title: &str, timestamp: DateTime<Utc>) -> Self {
        let input = format!("{}{}", title, timestamp.timestamp_nanos_opt().unwrap_or(0));
        let hash = blake3::hash(input.as_bytes());
        let hex = hash.to_hex();
        Self(hex[..Self::GENERATED_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TodoId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}
