//! Slash-command route handlers.
//!
//! Handlers only run behind the Slack auth route layer and extract the
//! [`VerifiedBody`] it attaches; they always reply 200.

use axum::{Extension, extract::State};
use tracing::{instrument, warn};

use crate::commands::{Command, messages};
use crate::middleware::VerifiedBody;
use crate::slack::SlashResponse;
use crate::state::AppState;

/// `POST /add`
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    Extension(body): Extension<VerifiedBody>,
) -> SlashResponse {
    run(&state, Command::Add, &body).await
}

/// `POST /done`
#[instrument(skip_all)]
pub async fn done(
    State(state): State<AppState>,
    Extension(body): Extension<VerifiedBody>,
) -> SlashResponse {
    run(&state, Command::Done, &body).await
}

/// `POST /list`
#[instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    Extension(body): Extension<VerifiedBody>,
) -> SlashResponse {
    run(&state, Command::List, &body).await
}

/// `POST /slack/commands` - route on the payload's `command` field.
#[instrument(skip_all)]
pub async fn dispatch(
    State(state): State<AppState>,
    Extension(body): Extension<VerifiedBody>,
) -> SlashResponse {
    match body.slash_command() {
        Ok(payload) => state.commands().route(&payload).await,
        Err(e) => {
            warn!(error = %e, "Verified body is not a valid form");
            SlashResponse::ephemeral(messages::GENERIC_FAILURE)
        }
    }
}

async fn run(state: &AppState, command: Command, body: &VerifiedBody) -> SlashResponse {
    match body.slash_command() {
        Ok(payload) => state.commands().dispatch(command, &payload).await,
        Err(e) => {
            warn!(%command, error = %e, "Verified body is not a valid form");
            SlashResponse::ephemeral(messages::failure(command))
        }
    }
}
