use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    flags::{ConfigKey, LoginSelect, RegistrationType, Toggle},
    invite_token::InviteToken,
    logo::LogoId,
    password::{Password, PasswordHash},
    roster::RosterEntry,
    session::{SessionId, TeamSession},
    team::{Team, TeamId},
    team_name::Shortname,
};

// TeamStore port trait and errors
#[derive(Debug, Error)]
pub enum TeamStoreError {
    #[error("Team already exists")]
    TeamAlreadyExists,
    #[error("Team not found")]
    TeamNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for TeamStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TeamAlreadyExists, Self::TeamAlreadyExists) => true,
            (Self::TeamNotFound, Self::TeamNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn team_exists(&self, name: &str) -> Result<bool, TeamStoreError>;
    async fn get_team_by_name(&self, name: &str) -> Result<Team, TeamStoreError>;
    async fn generate_hash(&self, password: &Password) -> Result<PasswordHash, TeamStoreError>;
    async fn create(
        &self,
        name: &Shortname,
        password_hash: PasswordHash,
        logo: &LogoId,
    ) -> Result<TeamId, TeamStoreError>;
    async fn add_team_data(
        &self,
        entry: &RosterEntry,
        team_id: TeamId,
    ) -> Result<(), TeamStoreError>;
    async fn verify_credentials(
        &self,
        team_id: TeamId,
        password: &Password,
    ) -> Result<Team, TeamStoreError>;
}

// InviteTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum InviteTokenStoreError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Token already used")]
    TokenAlreadyUsed,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InviteTokenStore: Send + Sync {
    /// `true` when the token exists and has not been used yet.
    async fn check(&self, token: &InviteToken) -> Result<bool, InviteTokenStoreError>;
    /// Marks the token as consumed by `team_id`.
    async fn use_token(
        &self,
        token: &InviteToken,
        team_id: TeamId,
    ) -> Result<(), InviteTokenStoreError>;
}

// ConfigurationStore port trait and errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Raw value of a configuration field. Unset fields read as `""`.
    async fn get(&self, key: ConfigKey) -> Result<String, ConfigurationError>;

    async fn registration(&self) -> Result<Toggle, ConfigurationError> {
        Ok(Toggle::from_value(&self.get(ConfigKey::Registration).await?))
    }

    async fn registration_type(&self) -> Result<RegistrationType, ConfigurationError> {
        Ok(RegistrationType::from_value(
            &self.get(ConfigKey::RegistrationType).await?,
        ))
    }

    async fn login(&self) -> Result<Toggle, ConfigurationError> {
        Ok(Toggle::from_value(&self.get(ConfigKey::Login).await?))
    }

    async fn login_select(&self) -> Result<LoginSelect, ConfigurationError> {
        Ok(LoginSelect::from_value(
            &self.get(ConfigKey::LoginSelect).await?,
        ))
    }
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Failed to (de)serialize session: {0}")]
    Serialization(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: &SessionId) -> Result<Option<TeamSession>, SessionStoreError>;
    async fn save(&self, id: &SessionId, session: &TeamSession) -> Result<(), SessionStoreError>;
}
