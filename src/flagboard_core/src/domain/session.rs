use std::{fmt, net::IpAddr};

use base64::{Engine, prelude::BASE64_STANDARD};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team::{Team, TeamId};

const CSRF_TOKEN_BYTES: usize = 16;

/// Per-session anti-CSRF token: 16 random bytes, standard base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; CSRF_TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(BASE64_STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque key a session is stored under; travels in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a cookie value. Anything that is not a UUID is not one of ours.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State kept for a logged-in team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSession {
    pub team_id: TeamId,
    pub team_name: String,
    pub csrf_token: CsrfToken,
    pub ip: IpAddr,
    #[serde(default)]
    pub admin: bool,
}

/// The caller's session as seen by one request.
///
/// The HTTP layer builds it from the session cookie, hands it to the login
/// flow by `&mut`, and persists whatever [`SessionContext::established`]
/// reports afterwards.
#[derive(Debug, Clone)]
pub struct SessionContext {
    remote_addr: IpAddr,
    session: Option<TeamSession>,
    established: bool,
}

impl SessionContext {
    pub fn new(remote_addr: IpAddr, existing: Option<TeamSession>) -> Self {
        Self {
            remote_addr,
            session: existing,
            established: false,
        }
    }

    pub fn remote_addr(&self) -> IpAddr {
        self.remote_addr
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TeamSession> {
        self.session.as_ref()
    }

    /// Starts a session for `team` unless one is already active.
    ///
    /// Returns `true` when a new session was created.
    pub fn establish(&mut self, team: &Team) -> bool {
        if self.is_active() {
            return false;
        }

        self.session = Some(TeamSession {
            team_id: team.id(),
            team_name: team.name().to_string(),
            csrf_token: CsrfToken::generate(),
            ip: self.remote_addr,
            admin: team.is_admin(),
        });
        self.established = true;
        true
    }

    /// The session created during this request, if any.
    pub fn established(&self) -> Option<&TeamSession> {
        if self.established {
            self.session.as_ref()
        } else {
            None
        }
    }
}
