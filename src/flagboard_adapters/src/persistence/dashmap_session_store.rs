use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use flagboard_core::{SessionId, SessionStore, SessionStoreError, TeamSession};
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct StoredSession {
    session: TeamSession,
    expires_at: Instant,
}

/// Process-local session store. Sessions expire `ttl` after they are saved;
/// expired entries are dropped on lookup and swept on every save.
#[derive(Debug, Clone)]
pub struct DashMapSessionStore {
    sessions: Arc<DashMap<SessionId, StoredSession>>,
    ttl: Duration,
}

impl DashMapSessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionStore for DashMapSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<TeamSession>, SessionStoreError> {
        let now = Instant::now();

        // The read guard must be gone before `remove_if` locks the shard.
        let session = match self.sessions.get(id) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.session.clone())),
            Some(_) => None,
            None => return Ok(None),
        };

        self.sessions.remove_if(id, |_, stored| stored.expires_at <= now);
        Ok(session)
    }

    async fn save(&self, id: &SessionId, session: &TeamSession) -> Result<(), SessionStoreError> {
        let now = Instant::now();
        self.sessions.retain(|_, stored| stored.expires_at > now);

        self.sessions.insert(
            id.clone(),
            StoredSession {
                session: session.clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }
}
