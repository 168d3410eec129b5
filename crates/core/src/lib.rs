//! Slack Todo Core - Shared types library.
//!
//! This crate provides common types used across all Slack todo components:
//! - `server` - Slash-command webhook receiver
//! - `cli` - Command-line tools for migrations, signing and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for todo IDs, Slack user IDs, task text and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
