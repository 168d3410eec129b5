//! Reply text for slash-command outcomes.
//!
//! Replies use Slack `mrkdwn`: `*bold*` headers and `~strike~` for
//! completed todos.

use std::fmt::Write;

use slack_todo_core::Todo;

use super::{AddOutcome, Command, DoneOutcome, ListOutcome};

/// Build the reply for an `/add` outcome.
#[must_use]
pub fn add_message(outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Added(todo) => format!("✅ Added todo: \"{}\"", todo.task),
        AddOutcome::MissingTask => "Please provide a task to add. Usage: /add <task>".to_string(),
    }
}

/// Build the reply for a `/done` outcome.
#[must_use]
pub fn done_message(outcome: &DoneOutcome) -> String {
    match outcome {
        DoneOutcome::Completed(todo) => format!("✅ Marked todo as done: \"{}\"", todo.task),
        DoneOutcome::MissingId => "Please provide a todo ID. Usage: /done <id>".to_string(),
        DoneOutcome::InvalidId => "Please provide a valid todo ID number.".to_string(),
        DoneOutcome::NotFound => {
            "Todo not found or you don't have permission to modify it.".to_string()
        }
    }
}

/// Build the reply for a `/list` outcome.
///
/// Pending todos come first; a section with no todos is omitted.
#[must_use]
pub fn list_message(outcome: &ListOutcome) -> String {
    let (pending, completed) = match outcome {
        ListOutcome::Empty => {
            return "No todos found. Use /add to create your first todo!".to_string();
        }
        ListOutcome::Listed { pending, completed } => (pending, completed),
    };

    let mut message = String::new();

    if !pending.is_empty() {
        message.push_str("*📝 Pending Todos:*\n");
        for todo in pending {
            push_line(&mut message, todo, false);
        }
    }

    if !completed.is_empty() {
        message.push_str("\n*✅ Completed Todos:*\n");
        for todo in completed {
            push_line(&mut message, todo, true);
        }
    }

    message
}

fn push_line(message: &mut String, todo: &Todo, struck: bool) {
    // Writing to a String cannot fail
    let _ = if struck {
        writeln!(message, "{}. ~{}~", todo.id, todo.task)
    } else {
        writeln!(message, "{}. {}", todo.id, todo.task)
    };
}

/// Reply when a verified body cannot be decoded far enough to know the command.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Generic reply when a command fails after verification.
#[must_use]
pub const fn failure(command: Command) -> &'static str {
    match command {
        Command::Add => "Error adding todo. Please try again.",
        Command::Done => "Error marking todo as done. Please try again.",
        Command::List => "Error retrieving todos. Please try again.",
    }
}

/// Reply for a command this service does not handle.
#[must_use]
pub fn unknown_command(command: &str) -> String {
    let supported: Vec<&str> = Command::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Unknown command `{command}`. Available commands: {}",
        supported.join(", ")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use slack_todo_core::{SlackUserId, TodoId};

    use super::*;

    fn todo(id: i32, task: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            owner: SlackUserId::parse("U1").unwrap(),
            task: task.to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_messages() {
        assert_eq!(
            add_message(&AddOutcome::Added(todo(1, "buy milk", false))),
            "✅ Added todo: \"buy milk\""
        );
        assert!(add_message(&AddOutcome::MissingTask).contains("Usage: /add <task>"));
    }

    #[test]
    fn test_done_messages() {
        assert_eq!(
            done_message(&DoneOutcome::Completed(todo(2, "report", true))),
            "✅ Marked todo as done: \"report\""
        );
        assert!(done_message(&DoneOutcome::MissingId).contains("Usage: /done <id>"));
        assert_eq!(
            done_message(&DoneOutcome::InvalidId),
            "Please provide a valid todo ID number."
        );
        assert_eq!(
            done_message(&DoneOutcome::NotFound),
            "Todo not found or you don't have permission to modify it."
        );
    }

    #[test]
    fn test_list_empty_message() {
        assert_eq!(
            list_message(&ListOutcome::Empty),
            "No todos found. Use /add to create your first todo!"
        );
    }

    #[test]
    fn test_list_both_sections_pending_first() {
        let outcome = ListOutcome::Listed {
            pending: vec![todo(2, "walk dog", false)],
            completed: vec![todo(1, "buy milk", true)],
        };

        assert_eq!(
            list_message(&outcome),
            "*📝 Pending Todos:*\n2. walk dog\n\n*✅ Completed Todos:*\n1. ~buy milk~\n"
        );
    }

    #[test]
    fn test_list_omits_empty_sections() {
        let only_pending = list_message(&ListOutcome::Listed {
            pending: vec![todo(1, "a", false)],
            completed: Vec::new(),
        });
        assert_eq!(only_pending, "*📝 Pending Todos:*\n1. a\n");

        let only_completed = list_message(&ListOutcome::Listed {
            pending: Vec::new(),
            completed: vec![todo(1, "a", true)],
        });
        assert_eq!(only_completed, "\n*✅ Completed Todos:*\n1. ~a~\n");
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        assert_ne!(failure(Command::Add), failure(Command::Done));
        assert_ne!(failure(Command::Done), failure(Command::List));
    }

    #[test]
    fn test_unknown_command_lists_supported() {
        let message = unknown_command("/nope");
        assert!(message.contains("`/nope`"));
        assert!(message.contains("/add, /done, /list"));
    }
}
