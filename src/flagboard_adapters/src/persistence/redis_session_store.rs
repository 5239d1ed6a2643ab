use std::sync::Arc;

use flagboard_core::{SessionId, SessionStore, SessionStoreError, TeamSession};
use redis::{Commands, Connection};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Loading session from Redis", skip_all)]
    async fn load(&self, id: &SessionId) -> Result<Option<TeamSession>, SessionStoreError> {
        let key = get_key(id);

        let mut conn = self.conn.write().await;
        let value: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        value
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| SessionStoreError::Serialization(e.to_string()))
            })
            .transpose()
    }

    #[tracing::instrument(name = "Saving session to Redis", skip_all)]
    async fn save(&self, id: &SessionId, session: &TeamSession) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let json = serde_json::to_string(session)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        let mut conn = self.conn.write().await;
        conn.set_ex(key, json, self.session_ttl)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }
}

const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, id)
}
