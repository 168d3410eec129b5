//! Slack todo server library.
//!
//! Receives Slack slash-command webhooks, authenticates them with the
//! `v0` request signature and keeps a private todo list per Slack user.
//!
//! # Security
//!
//! Every command route sits behind [`middleware::verify_slack_request`]:
//! the raw body is captured byte-for-byte, the timestamp must fall inside
//! the replay window and the signature is compared in constant time before
//! anything is parsed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod slack;
pub mod state;

pub use routes::router;
pub use state::AppState;
