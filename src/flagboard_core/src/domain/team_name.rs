use std::fmt;

use thiserror::Error;

/// Longest team name the scoreboard UI renders without breaking its layout.
pub const SHORTNAME_MAX_CHARS: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamNameError {
    #[error("Team name is empty")]
    Empty,
}

/// The name a team is stored under: the submitted name cut to
/// [`SHORTNAME_MAX_CHARS`] characters.
///
/// Only the emptiness check looks at the trimmed name. The stored value keeps
/// any surrounding whitespace that survives the cut, so two submissions that
/// differ only past the 20th character collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortname(String);

impl Shortname {
    pub fn parse(raw: &str) -> Result<Self, TeamNameError> {
        if raw.trim().is_empty() {
            return Err(TeamNameError::Empty);
        }

        Ok(Self(raw.chars().take(SHORTNAME_MAX_CHARS).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Shortname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shortname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
