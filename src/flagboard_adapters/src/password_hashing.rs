use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use flagboard_core::{Password, PasswordHash, TeamStoreError};
use secrecy::{ExposeSecret, Secret};

#[derive(Debug, thiserror::Error)]
pub enum PasswordHashingError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Stored password hash is unusable: {0}")]
    InvalidHash(String),
    #[error("Password hashing failed: {0}")]
    Unexpected(String),
}

/// Only a mismatch is the caller's fault. A hash that cannot be read is a
/// fault of the store.
impl From<PasswordHashingError> for TeamStoreError {
    fn from(e: PasswordHashingError) -> Self {
        match e {
            PasswordHashingError::Mismatch => TeamStoreError::IncorrectPassword,
            other => TeamStoreError::UnexpectedError(other.to_string()),
        }
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordHashingError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHashingError::Unexpected(e.to_string()))?,
    ))
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: PasswordHash,
    password_candidate: Password,
) -> Result<(), PasswordHashingError> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PhcHash<'_> =
                PhcHash::new(expected_password_hash.as_ref().expose_secret())
                    .map_err(|e| PasswordHashingError::InvalidHash(e.to_string()))?;

            hasher()?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| match e {
                    password_hash::Error::Password => PasswordHashingError::Mismatch,
                    other => PasswordHashingError::InvalidHash(other.to_string()),
                })
        })
    })
    .await
    .map_err(|e| PasswordHashingError::Unexpected(e.to_string()))?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(
    password: Password,
) -> Result<PasswordHash, PasswordHashingError> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                .map_err(|e| PasswordHashingError::Unexpected(e.to_string()))
        })
    })
    .await
    .map_err(|e| PasswordHashingError::Unexpected(e.to_string()))?;

    result
}
