//! Todo task text.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`TaskText`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskTextError {
    /// Nothing but whitespace was supplied.
    #[error("task text cannot be empty")]
    Empty,
}

/// The text of a todo, trimmed of surrounding whitespace and never empty.
///
/// ```
/// use slack_todo_core::TaskText;
///
/// let task = TaskText::parse("  buy milk \n").unwrap();
/// assert_eq!(task.as_str(), "buy milk");
///
/// assert!(TaskText::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Parse task text, trimming leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTextError::Empty`] if the trimmed input is empty.
    pub fn parse(s: &str) -> Result<Self, TaskTextError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TaskTextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the task as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `TaskText` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
