//! Typed views of the scoreboard's string-valued configuration toggles.
//!
//! Values are stored as strings (`"0"`, `"1"`, `"2"`) and each toggle only
//! ever compares against one literal, so every other value, including an
//! unset one, falls into the default branch.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Registration,
    RegistrationType,
    Login,
    LoginSelect,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Registration,
        ConfigKey::RegistrationType,
        ConfigKey::Login,
        ConfigKey::LoginSelect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Registration => "registration",
            ConfigKey::RegistrationType => "registration_type",
            ConfigKey::Login => "login",
            ConfigKey::LoginSelect => "login_select",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On/off switch for `registration` and `login`. Only `"0"` turns it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Disabled,
    Enabled,
}

impl Toggle {
    pub fn from_value(value: &str) -> Self {
        if value == "0" {
            Toggle::Disabled
        } else {
            Toggle::Enabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Toggle::Enabled)
    }
}

/// `registration_type`: `"2"` requires an invite token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationType {
    Open,
    Tokenized,
}

impl RegistrationType {
    pub fn from_value(value: &str) -> Self {
        if value == "2" {
            RegistrationType::Tokenized
        } else {
            RegistrationType::Open
        }
    }
}

/// `login_select`: `"1"` means teams are picked by id from a list, anything
/// else means they type their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginSelect {
    ByName,
    ById,
}

impl LoginSelect {
    pub fn from_value(value: &str) -> Self {
        if value == "1" {
            LoginSelect::ById
        } else {
            LoginSelect::ByName
        }
    }
}
