//! Application state shared across handlers.

use std::sync::Arc;

use crate::commands::CommandRouter;
use crate::config::SlackConfig;
use crate::db::TodoStore;
use crate::slack::SignatureVerifier;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is read-only after
/// startup; the only mutable data lives behind the [`TodoStore`].
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    verifier: SignatureVerifier,
    commands: CommandRouter,
    max_body_bytes: usize,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `slack` - Signing secret, replay window and body limit
    /// * `store` - Todo persistence backend
    #[must_use]
    pub fn new(slack: &SlackConfig, store: Arc<dyn TodoStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                verifier: SignatureVerifier::from_config(slack),
                commands: CommandRouter::new(store),
                max_body_bytes: slack.max_body_bytes,
            }),
        }
    }

    /// Get a reference to the Slack signature verifier.
    #[must_use]
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.inner.verifier
    }

    /// Get a reference to the slash-command router.
    #[must_use]
    pub fn commands(&self) -> &CommandRouter {
        &self.inner.commands
    }

    /// Get a reference to the todo store.
    #[must_use]
    pub fn store(&self) -> &dyn TodoStore {
        self.inner.commands.store()
    }

    /// Largest body accepted on signed routes.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.inner.max_body_bytes
    }
}
