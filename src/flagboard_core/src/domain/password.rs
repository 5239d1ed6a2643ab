use secrecy::{ExposeSecret, Secret};

/// Plain-text team password as submitted in the form.
///
/// Scoreboards traditionally impose no password policy, so any string is
/// accepted, the empty one included.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: Secret<String>) -> Self {
        Self(password)
    }
}

impl From<Secret<String>> for Password {
    fn from(password: Secret<String>) -> Self {
        Self(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// PHC-formatted password hash produced by the team store.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
