//! Slash-command payload and response types.
//!
//! See: <https://api.slack.com/interactivity/slash-commands>

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error decoding a URL-encoded form body.
pub type FormError = serde_urlencoded::de::Error;

/// Decode a URL-encoded body into a field name → value map.
///
/// `+` decodes to a space and percent escapes are resolved. When a field
/// repeats, the last value wins.
///
/// # Errors
///
/// Returns an error if the body is not valid URL-encoded form data.
pub fn parse_form_fields(raw_body: &[u8]) -> Result<HashMap<String, String>, FormError> {
    serde_urlencoded::from_bytes(raw_body)
}

/// Slash-command invocation as posted by Slack.
///
/// Fields Slack omits decode as empty strings; fields this service does not
/// use (`token`, `api_app_id`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    /// The command that was typed, e.g. `/add`.
    pub command: String,
    /// Everything after the command.
    pub text: String,
    /// ID of the invoking user.
    pub user_id: String,
    /// Display name of the invoking user.
    pub user_name: String,
    /// Workspace ID.
    pub team_id: String,
    /// Channel the command was typed in.
    pub channel_id: String,
    /// URL for delayed responses.
    pub response_url: String,
    /// Short-lived ID for opening modals.
    pub trigger_id: String,
}

impl SlashCommand {
    /// Decode a verified raw body.
    ///
    /// Built from [`parse_form_fields`], so a repeated field resolves the
    /// same way: last value wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid URL-encoded form data.
    pub fn from_form(raw_body: &[u8]) -> Result<Self, FormError> {
        let mut fields = parse_form_fields(raw_body)?;
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();

        Ok(Self {
            command: take("command"),
            text: take("text"),
            user_id: take("user_id"),
            user_name: take("user_name"),
            team_id: take("team_id"),
            channel_id: take("channel_id"),
            response_url: take("response_url"),
            trigger_id: take("trigger_id"),
        })
    }
}

/// Visibility of a slash-command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Only the invoking user sees the reply.
    Ephemeral,
}

/// Reply envelope for a slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl SlashResponse {
    /// Create an ephemeral reply.
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }
}

impl IntoResponse for SlashResponse {
    fn into_response(self) -> Response {
        // Slack only renders replies delivered with 200
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_fields_decodes_plus_and_percent() {
        let fields = parse_form_fields(b"text=buy+milk&user_id=U1").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("text").map(String::as_str), Some("buy milk"));
        assert_eq!(fields.get("user_id").map(String::as_str), Some("U1"));

        let fields = parse_form_fields(b"command=%2Fadd&text=50%25+off").unwrap();
        assert_eq!(fields.get("command").map(String::as_str), Some("/add"));
        assert_eq!(fields.get("text").map(String::as_str), Some("50% off"));
    }

    #[test]
    fn test_slash_command_from_form() {
        let cmd = SlashCommand::from_form(
            b"token=ignored&team_id=T1&channel_id=C1&user_id=U1&user_name=ada\
              &command=%2Fadd&text=buy+milk&response_url=https%3A%2F%2Fhooks.slack.com%2Fx\
              &trigger_id=123.456",
        )
        .unwrap();

        assert_eq!(cmd.command, "/add");
        assert_eq!(cmd.text, "buy milk");
        assert_eq!(cmd.user_id, "U1");
        assert_eq!(cmd.user_name, "ada");
        assert_eq!(cmd.team_id, "T1");
        assert_eq!(cmd.channel_id, "C1");
        assert_eq!(cmd.response_url, "https://hooks.slack.com/x");
        assert_eq!(cmd.trigger_id, "123.456");
    }

    #[test]
    fn test_slash_command_round_trip_from_raw_body() {
        let cmd = SlashCommand::from_form(b"text=buy+milk&user_id=U1").unwrap();
        assert_eq!(cmd.text, "buy milk");
        assert_eq!(cmd.user_id, "U1");
    }

    #[test]
    fn test_repeated_field_last_value_wins_in_both_decoders() {
        let raw = b"text=a&text=b&user_id=U1";

        let fields = parse_form_fields(raw).unwrap();
        let cmd = SlashCommand::from_form(raw).unwrap();

        assert_eq!(fields.get("text").map(String::as_str), Some("b"));
        assert_eq!(cmd.text, "b");
        assert_eq!(cmd.user_id, "U1");
    }

    #[test]
    fn test_slash_command_missing_fields_default_empty() {
        let cmd = SlashCommand::from_form(b"user_id=U1").unwrap();
        assert_eq!(cmd.user_id, "U1");
        assert!(cmd.text.is_empty());
        assert!(cmd.command.is_empty());

        let cmd = SlashCommand::from_form(b"").unwrap();
        assert_eq!(cmd, SlashCommand::default());
    }

    #[test]
    fn test_ephemeral_response_serialization() {
        let json = serde_json::to_value(SlashResponse::ephemeral("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"response_type": "ephemeral", "text": "hi"})
        );
    }

    #[test]
    fn test_slash_response_status_is_ok() {
        let response = SlashResponse::ephemeral("anything").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
