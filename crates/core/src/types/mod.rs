//! Core types for the Slack todo service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod slack_user;
pub mod status;
pub mod task;
pub mod todo;

pub use id::*;
pub use slack_user::{SlackUserId, SlackUserIdError};
pub use status::TodoStatus;
pub use task::{TaskText, TaskTextError};
pub use todo::Todo;
