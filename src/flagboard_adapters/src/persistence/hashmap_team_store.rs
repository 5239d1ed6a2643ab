use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use flagboard_core::{
    LogoId, Password, PasswordHash, RosterEntry, Shortname, Team, TeamId, TeamStore,
    TeamStoreError,
};

use crate::password_hashing::{compute_password_hash, verify_password_hash};

#[derive(Default)]
struct TeamTable {
    teams: HashMap<TeamId, Team>,
    // lowercased name -> id; names are unique regardless of case
    names: HashMap<String, TeamId>,
    team_data: Vec<(TeamId, RosterEntry)>,
    last_id: i64,
}

impl TeamTable {
    fn find_by_name(&self, name: &str) -> Option<&Team> {
        self.names
            .get(&name.to_lowercase())
            .and_then(|id| self.teams.get(id))
    }

    fn insert(
        &mut self,
        name: &str,
        password_hash: PasswordHash,
        logo: LogoId,
        admin: bool,
    ) -> Result<TeamId, TeamStoreError> {
        let key = name.to_lowercase();
        if self.names.contains_key(&key) {
            return Err(TeamStoreError::TeamAlreadyExists);
        }

        self.last_id += 1;
        let id = TeamId::new(self.last_id);
        self.teams.insert(
            id,
            Team::new(id, name.to_string(), password_hash, logo, admin),
        );
        self.names.insert(key, id);
        Ok(id)
    }
}

#[derive(Default, Clone)]
pub struct HashMapTeamStore {
    inner: Arc<RwLock<TeamTable>>,
}

impl HashMapTeamStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TeamTable::default())),
        }
    }

    /// Adds a team directly, bypassing registration. Used to seed admin teams.
    pub async fn insert_team(
        &self,
        name: &Shortname,
        password: Password,
        logo: LogoId,
        admin: bool,
    ) -> Result<TeamId, TeamStoreError> {
        let password_hash = compute_password_hash(password)
            .await
            .map_err(TeamStoreError::from)?;

        self.inner
            .write()
            .await
            .insert(name.as_str(), password_hash, logo, admin)
    }

    pub async fn team_count(&self) -> usize {
        self.inner.read().await.teams.len()
    }

    pub async fn team_data(&self, team_id: TeamId) -> Vec<RosterEntry> {
        self.inner
            .read()
            .await
            .team_data
            .iter()
            .filter(|(id, _)| *id == team_id)
            .map(|(_, entry)| entry.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl TeamStore for HashMapTeamStore {
    async fn team_exists(&self, name: &str) -> Result<bool, TeamStoreError> {
        Ok(self.inner.read().await.find_by_name(name).is_some())
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Team, TeamStoreError> {
        self.inner
            .read()
            .await
            .find_by_name(name)
            .cloned()
            .ok_or(TeamStoreError::TeamNotFound)
    }

    async fn generate_hash(&self, password: &Password) -> Result<PasswordHash, TeamStoreError> {
        compute_password_hash(password.clone())
            .await
            .map_err(TeamStoreError::from)
    }

    async fn create(
        &self,
        name: &Shortname,
        password_hash: PasswordHash,
        logo: &LogoId,
    ) -> Result<TeamId, TeamStoreError> {
        self.inner
            .write()
            .await
            .insert(name.as_str(), password_hash, logo.clone(), false)
    }

    async fn add_team_data(
        &self,
        entry: &RosterEntry,
        team_id: TeamId,
    ) -> Result<(), TeamStoreError> {
        let mut inner = self.inner.write().await;
        if !inner.teams.contains_key(&team_id) {
            return Err(TeamStoreError::TeamNotFound);
        }
        inner.team_data.push((team_id, entry.clone()));
        Ok(())
    }

    async fn verify_credentials(
        &self,
        team_id: TeamId,
        password: &Password,
    ) -> Result<Team, TeamStoreError> {
        let team = self
            .inner
            .read()
            .await
            .teams
            .get(&team_id)
            .cloned()
            .ok_or(TeamStoreError::TeamNotFound)?;

        verify_password_hash(team.password_hash().clone(), password.clone()).await?;

        Ok(team)
    }
}
