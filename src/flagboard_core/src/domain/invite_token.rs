use std::{fmt, sync::LazyLock};

use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use thiserror::Error;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("token pattern is a valid regex"));

/// Legacy front ends post the string `"null"` when no token was entered.
const NULL_SENTINEL: &str = "null";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InviteTokenError {
    #[error("Invalid invite token")]
    InvalidFormat,
}

/// Pre-issued, single-use registration token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InviteToken(String);

impl InviteToken {
    pub fn parse(raw: impl Into<String>) -> Result<Self, InviteTokenError> {
        let raw = raw.into();
        if !TOKEN_PATTERN.is_match(&raw) {
            return Err(InviteTokenError::InvalidFormat);
        }
        Ok(Self(raw))
    }

    /// Reads an optional form field, mapping everything that is not a
    /// well-formed token (absent, empty, malformed, or the `"null"` sentinel)
    /// to `None`.
    pub fn from_form_field(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(NULL_SENTINEL) | None => None,
            Some(raw) => Self::parse(raw).ok(),
        }
    }

    /// A fresh random alphanumeric token of `len` characters.
    pub fn random(len: usize) -> Self {
        Self(
            rand::rng()
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InviteToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
