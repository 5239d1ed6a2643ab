use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("{0} must be a JSON array of strings")]
    NotAnArray(&'static str),
    #[error("names and emails differ in length ({names} names, {emails} emails)")]
    LengthMismatch { names: usize, emails: usize },
}

/// One player of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub email: String,
}

/// Players submitted together with a team registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<RosterEntry>);

impl Roster {
    /// Builds a roster from the two JSON-encoded form fields, pairing
    /// `names[i]` with `emails[i]`.
    pub fn from_json(names: &str, emails: &str) -> Result<Self, RosterError> {
        let names = decode_string_array(names, "names")?;
        let emails = decode_string_array(emails, "emails")?;

        if names.len() != emails.len() {
            return Err(RosterError::LengthMismatch {
                names: names.len(),
                emails: emails.len(),
            });
        }

        Ok(Self(
            names
                .into_iter()
                .zip(emails)
                .map(|(name, email)| RosterEntry { name, email })
                .collect(),
        ))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn decode_string_array(raw: &str, field: &'static str) -> Result<Vec<String>, RosterError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|_| RosterError::NotAnArray(field))
}
