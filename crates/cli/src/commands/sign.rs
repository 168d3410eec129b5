//! Request signing command.
//!
//! Prints the two headers Slack would send with `body`, ready to paste
//! into `curl -H`:
//!
//! ```bash
//! todo-cli sign --secret "$SLACK_SIGNING_SECRET" --body 'command=%2Flist&user_id=U1'
//! ```

use thiserror::Error;

use slack_todo_server::slack::{SIGNATURE_HEADER, TIMESTAMP_HEADER, compute_signature};

/// Errors that can occur while signing.
#[derive(Debug, Error)]
pub enum SignError {
    #[error("No secret given and SLACK_SIGNING_SECRET is not set")]
    MissingSecret,

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),
}

/// Print signature headers for `body`.
///
/// # Errors
///
/// Returns an error if no secret is available.
pub fn run(secret: Option<String>, timestamp: Option<i64>, body: &str) -> Result<(), SignError> {
    let secret = match secret {
        Some(secret) => secret,
        None => {
            dotenvy::dotenv().ok();
            std::env::var("SLACK_SIGNING_SECRET").map_err(|_| SignError::MissingSecret)?
        }
    };
    let timestamp = timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());

    let (timestamp, signature) = headers(&secret, timestamp, body)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{TIMESTAMP_HEADER}: {timestamp}");
        println!("{SIGNATURE_HEADER}: {signature}");
    }
    Ok(())
}

fn headers(secret: &str, timestamp: i64, body: &str) -> Result<(String, String), SignError> {
    let timestamp = timestamp.to_string();
    let signature = compute_signature(secret.as_bytes(), &timestamp, body.as_bytes())
        .map_err(|e| SignError::InvalidKey(e.to_string()))?;
    Ok((timestamp, signature))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_match_slack_reference() {
        let (timestamp, signature) = headers(
            "8f742231b10e8888abcd99yyyzzz85a5",
            1_531_420_618,
            "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c",
        )
        .unwrap();

        assert_eq!(timestamp, "1531420618");
        assert_eq!(
            signature,
            "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503"
        );
    }
}
