//! Slack user identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`SlackUserId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlackUserIdError {
    /// The input string is empty.
    #[error("slack user id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slack user id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[A-Za-z0-9]`.
    #[error("slack user id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A Slack user ID (e.g. `U012AB3CD`), the owner key for todos.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - ASCII letters and digits only
///
/// ## Examples
///
/// ```
/// use slack_todo_core::SlackUserId;
///
/// assert!(SlackUserId::parse("U012AB3CD").is_ok());
/// assert!(SlackUserId::parse("W0123").is_ok());
///
/// assert!(SlackUserId::parse("").is_err());
/// assert!(SlackUserId::parse("U1; DROP").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SlackUserId(String);

impl SlackUserId {
    /// Maximum accepted length.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `SlackUserId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters,
    /// or contains anything other than ASCII letters and digits.
    pub fn parse(s: &str) -> Result<Self, SlackUserIdError> {
        if s.is_empty() {
            return Err(SlackUserIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlackUserIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(SlackUserIdError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the user ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SlackUserId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SlackUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SlackUserId {
    type Err = SlackUserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SlackUserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for SlackUserId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for SlackUserId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
