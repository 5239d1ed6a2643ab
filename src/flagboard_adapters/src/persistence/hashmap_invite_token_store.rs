use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use flagboard_core::{InviteToken, InviteTokenStore, InviteTokenStoreError, TeamId};

const GENERATED_TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, Default)]
struct TokenState {
    used_by: Option<(TeamId, DateTime<Utc>)>,
}

#[derive(Default, Clone)]
pub struct HashMapInviteTokenStore {
    tokens: Arc<RwLock<HashMap<InviteToken, TokenState>>>,
}

impl HashMapInviteTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_token(&self, token: InviteToken) {
        self.tokens.write().await.entry(token).or_default();
    }

    /// Issues a fresh random token and stores it as unused.
    pub async fn generate(&self) -> InviteToken {
        let token = InviteToken::random(GENERATED_TOKEN_LEN);
        self.add_token(token.clone()).await;
        token
    }

    pub async fn used_by(&self, token: &InviteToken) -> Option<TeamId> {
        self.tokens
            .read()
            .await
            .get(token)
            .and_then(|state| state.used_by.map(|(team_id, _)| team_id))
    }
}

#[async_trait::async_trait]
impl InviteTokenStore for HashMapInviteTokenStore {
    async fn check(&self, token: &InviteToken) -> Result<bool, InviteTokenStoreError> {
        Ok(self
            .tokens
            .read()
            .await
            .get(token)
            .is_some_and(|state| state.used_by.is_none()))
    }

    async fn use_token(
        &self,
        token: &InviteToken,
        team_id: TeamId,
    ) -> Result<(), InviteTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        let state = tokens
            .get_mut(token)
            .ok_or(InviteTokenStoreError::TokenNotFound)?;

        if state.used_by.is_some() {
            return Err(InviteTokenStoreError::TokenAlreadyUsed);
        }

        state.used_by = Some((team_id, Utc::now()));
        Ok(())
    }
}
