use std::sync::LazyLock;

use regex::Regex;

static ACTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("action pattern is a valid regex"));

/// Actions served by the index AJAX endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RegisterTeam,
    RegisterNames,
    LoginTeam,
    /// Missing, malformed or unknown action.
    None,
}

impl Action {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| ACTION_PATTERN.is_match(raw)) else {
            return Action::None;
        };

        match raw {
            "register_team" => Action::RegisterTeam,
            "register_names" => Action::RegisterNames,
            "login_team" => Action::LoginTeam,
            _ => Action::None,
        }
    }
}
