use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{logo::LogoId, password::PasswordHash};

/// Storage-assigned team identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: String,
    password_hash: PasswordHash,
    logo: LogoId,
    admin: bool,
}

impl Team {
    pub fn new(
        id: TeamId,
        name: String,
        password_hash: PasswordHash,
        logo: LogoId,
        admin: bool,
    ) -> Self {
        Self {
            id,
            name,
            password_hash,
            logo,
            admin,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn logo(&self) -> &LogoId {
        &self.logo
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
