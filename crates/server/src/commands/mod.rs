//! Slash-command handlers and dispatch.
//!
//! Each handler returns an explicit outcome enum; [`messages`] turns outcomes
//! into reply text. [`CommandRouter`] owns the store handle, validates the
//! invoking user and converts store failures into the generic per-command
//! failure reply, so every verified request is answered with a 200.

pub mod add;
pub mod done;
pub mod list;
pub mod messages;

use std::sync::Arc;

use tracing::{error, info, warn};

use slack_todo_core::SlackUserId;

use crate::db::TodoStore;
use crate::slack::{SlashCommand, SlashResponse};

pub use add::AddOutcome;
pub use done::DoneOutcome;
pub use list::ListOutcome;

/// The slash commands this service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Done,
    List,
}

impl Command {
    /// Every supported command.
    pub const ALL: [Self; 3] = [Self::Add, Self::Done, Self::List];

    /// Parse the `command` field Slack sends (e.g. `/add`).
    ///
    /// Surrounding whitespace and case are ignored.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "/add" => Some(Self::Add),
            "/done" => Some(Self::Done),
            "/list" => Some(Self::List),
            _ => None,
        }
    }

    /// The command as typed in Slack.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "/add",
            Self::Done => "/done",
            Self::List => "/list",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatches verified slash commands to their handlers.
#[derive(Clone)]
pub struct CommandRouter {
    store: Arc<dyn TodoStore>,
}

impl std::fmt::Debug for CommandRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRouter").finish_non_exhaustive()
    }
}

impl CommandRouter {
    /// Create a router over a todo store.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the todo store.
    #[must_use]
    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }

    /// Dispatch on the payload's own `command` field.
    pub async fn route(&self, payload: &SlashCommand) -> SlashResponse {
        match Command::parse(&payload.command) {
            Some(command) => self.dispatch(command, payload).await,
            None => {
                warn!(command = %payload.command, "Unknown slash command");
                SlashResponse::ephemeral(messages::unknown_command(&payload.command))
            }
        }
    }

    /// Run one command for the invoking user.
    ///
    /// Never fails: store errors are logged and replaced by the command's
    /// generic failure message.
    pub async fn dispatch(&self, command: Command, payload: &SlashCommand) -> SlashResponse {
        let owner = match SlackUserId::parse(&payload.user_id) {
            Ok(owner) => owner,
            Err(e) => {
                warn!(%command, error = %e, "Slash command with invalid user_id");
                return SlashResponse::ephemeral(messages::failure(command));
            }
        };

        let store = self.store();
        let result = match command {
            Command::Add => add::add(store, &owner, &payload.text)
                .await
                .map(|outcome| messages::add_message(&outcome)),
            Command::Done => done::done(store, &owner, &payload.text)
                .await
                .map(|outcome| messages::done_message(&outcome)),
            Command::List => list::list(store, &owner)
                .await
                .map(|outcome| messages::list_message(&outcome)),
        };

        match result {
            Ok(text) => {
                info!(%command, user = %owner, "Slash command handled");
                SlashResponse::ephemeral(text)
            }
            Err(e) => {
                error!(%command, user = %owner, error = %e, "Slash command failed");
                SlashResponse::ephemeral(messages::failure(command))
            }
        }
    }
}
