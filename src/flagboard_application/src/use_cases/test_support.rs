//! In-memory doubles for the ports, shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use flagboard_core::{
    ConfigKey, ConfigurationError, ConfigurationStore, InviteToken, InviteTokenStore,
    InviteTokenStoreError, LogoCatalog, LogoCatalogError, LogoId, Password, PasswordHash,
    RosterEntry, SessionContext, Shortname, Team, TeamId, TeamStore, TeamStoreError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn password(value: &str) -> Password {
    Password::from(Secret::new(value.to_string()))
}

pub fn session_context() -> SessionContext {
    SessionContext::new("10.0.0.1".parse().unwrap(), None)
}

fn fake_hash(password: &Password) -> String {
    format!("fake${}", password.as_ref().expose_secret())
}

#[derive(Clone, Default)]
pub struct MockConfiguration {
    values: Arc<RwLock<HashMap<ConfigKey, String>>>,
}

impl MockConfiguration {
    /// Registration and login open, login by name.
    pub fn open() -> Self {
        Self::with(&[
            (ConfigKey::Registration, "1"),
            (ConfigKey::RegistrationType, "1"),
            (ConfigKey::Login, "1"),
            (ConfigKey::LoginSelect, "0"),
        ])
    }

    pub fn with(values: &[(ConfigKey, &str)]) -> Self {
        let values = values
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn set(&self, key: ConfigKey, value: &str) {
        self.values.write().await.insert(key, value.to_string());
    }
}

#[async_trait]
impl ConfigurationStore for MockConfiguration {
    async fn get(&self, key: ConfigKey) -> Result<String, ConfigurationError> {
        Ok(self
            .values
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
struct Teams {
    teams: Vec<Team>,
    roster: Vec<(TeamId, RosterEntry)>,
    verify_calls: usize,
    fail_create: bool,
}

#[derive(Clone, Default)]
pub struct MockTeamStore {
    inner: Arc<RwLock<Teams>>,
}

impl MockTeamStore {
    pub async fn insert_team(&self, name: &str, password: &str, admin: bool) -> TeamId {
        let mut inner = self.inner.write().await;
        let id = TeamId::new(inner.teams.len() as i64 + 1);
        inner.teams.push(Team::new(
            id,
            name.to_string(),
            PasswordHash::new(Secret::new(fake_hash(&self::password(password)))),
            LogoId::parse("badger").unwrap(),
            admin,
        ));
        id
    }

    pub async fn fail_create(&self) {
        self.inner.write().await.fail_create = true;
    }

    pub async fn team_count(&self) -> usize {
        self.inner.read().await.teams.len()
    }

    pub async fn team_named(&self, name: &str) -> Option<Team> {
        self.inner
            .read()
            .await
            .teams
            .iter()
            .find(|team| team.name() == name)
            .cloned()
    }

    pub async fn roster(&self) -> Vec<(TeamId, RosterEntry)> {
        self.inner.read().await.roster.clone()
    }

    pub async fn verify_calls(&self) -> usize {
        self.inner.read().await.verify_calls
    }
}

#[async_trait]
impl TeamStore for MockTeamStore {
    async fn team_exists(&self, name: &str) -> Result<bool, TeamStoreError> {
        Ok(self.team_named(name).await.is_some())
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Team, TeamStoreError> {
        self.team_named(name)
            .await
            .ok_or(TeamStoreError::TeamNotFound)
    }

    async fn generate_hash(&self, password: &Password) -> Result<PasswordHash, TeamStoreError> {
        Ok(PasswordHash::new(Secret::new(fake_hash(password))))
    }

    async fn create(
        &self,
        name: &Shortname,
        password_hash: PasswordHash,
        logo: &LogoId,
    ) -> Result<TeamId, TeamStoreError> {
        let mut inner = self.inner.write().await;
        if inner.fail_create {
            return Err(TeamStoreError::UnexpectedError("insert failed".to_string()));
        }
        if inner.teams.iter().any(|team| team.name() == name.as_str()) {
            return Err(TeamStoreError::TeamAlreadyExists);
        }

        let id = TeamId::new(inner.teams.len() as i64 + 1);
        inner.teams.push(Team::new(
            id,
            name.to_string(),
            password_hash,
            logo.clone(),
            false,
        ));
        Ok(id)
    }

    async fn add_team_data(
        &self,
        entry: &RosterEntry,
        team_id: TeamId,
    ) -> Result<(), TeamStoreError> {
        self.inner
            .write()
            .await
            .roster
            .push((team_id, entry.clone()));
        Ok(())
    }

    async fn verify_credentials(
        &self,
        team_id: TeamId,
        password: &Password,
    ) -> Result<Team, TeamStoreError> {
        let mut inner = self.inner.write().await;
        inner.verify_calls += 1;

        let team = inner
            .teams
            .iter()
            .find(|team| team.id() == team_id)
            .ok_or(TeamStoreError::TeamNotFound)?;

        if team.password_hash().as_ref().expose_secret() != &fake_hash(password) {
            return Err(TeamStoreError::IncorrectPassword);
        }
        Ok(team.clone())
    }
}

#[derive(Clone, Default)]
pub struct MockInviteTokenStore {
    tokens: Arc<RwLock<HashMap<String, Option<TeamId>>>>,
}

impl MockInviteTokenStore {
    pub fn with_tokens(tokens: &[&str]) -> Self {
        let tokens = tokens
            .iter()
            .map(|token| (token.to_string(), None))
            .collect();
        Self {
            tokens: Arc::new(RwLock::new(tokens)),
        }
    }

    pub async fn used_by(&self, token: &str) -> Option<TeamId> {
        self.tokens.read().await.get(token).copied().flatten()
    }
}

#[async_trait]
impl InviteTokenStore for MockInviteTokenStore {
    async fn check(&self, token: &InviteToken) -> Result<bool, InviteTokenStoreError> {
        Ok(matches!(
            self.tokens.read().await.get(token.as_str()),
            Some(None)
        ))
    }

    async fn use_token(
        &self,
        token: &InviteToken,
        team_id: TeamId,
    ) -> Result<(), InviteTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        let slot = tokens
            .get_mut(token.as_str())
            .ok_or(InviteTokenStoreError::TokenNotFound)?;
        if slot.is_some() {
            return Err(InviteTokenStoreError::TokenAlreadyUsed);
        }
        *slot = Some(team_id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockLogoCatalog {
    logos: Vec<LogoId>,
}

impl Default for MockLogoCatalog {
    fn default() -> Self {
        Self {
            logos: vec![
                LogoId::parse("badger").unwrap(),
                LogoId::parse("falcon").unwrap(),
            ],
        }
    }
}

#[async_trait]
impl LogoCatalog for MockLogoCatalog {
    async fn check_exists(&self, logo: &LogoId) -> Result<bool, LogoCatalogError> {
        Ok(self.logos.contains(logo))
    }

    async fn random_logo(&self) -> Result<LogoId, LogoCatalogError> {
        self.logos.last().cloned().ok_or(LogoCatalogError::Empty)
    }
}
