use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static LOGO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("logo pattern is a valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogoError {
    #[error("Invalid logo identifier")]
    InvalidIdentifier,
}

/// Identifier of a team logo, e.g. `"badger"` or `"cat-2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogoId(String);

impl LogoId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, LogoError> {
        let raw = raw.into();
        if !LOGO_PATTERN.is_match(&raw) {
            return Err(LogoError::InvalidIdentifier);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LogoId {
    type Error = LogoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LogoId> for String {
    fn from(logo: LogoId) -> Self {
        logo.0
    }
}

impl AsRef<str> for LogoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
