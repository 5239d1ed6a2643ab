use flagboard_core::{InviteToken, InviteTokenStore, InviteTokenStoreError, TeamId};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresInviteTokenStore {
    pool: PgPool,
}

impl PostgresInviteTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issues a token. Re-adding an existing token leaves it untouched.
    #[tracing::instrument(name = "Adding invite token to PostgreSQL", skip_all)]
    pub async fn add_token(&self, token: &InviteToken) -> Result<(), InviteTokenStoreError> {
        sqlx::query(
            r#"
                INSERT INTO registration_tokens (token, used)
                VALUES ($1, FALSE)
                ON CONFLICT (token) DO NOTHING
            "#,
        )
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| InviteTokenStoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl InviteTokenStore for PostgresInviteTokenStore {
    #[tracing::instrument(name = "Checking invite token in PostgreSQL", skip_all)]
    async fn check(&self, token: &InviteToken) -> Result<bool, InviteTokenStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM registration_tokens
                    WHERE token = $1 AND used = FALSE
                )
            "#,
        )
        .bind(token.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| InviteTokenStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Using invite token in PostgreSQL", skip_all)]
    async fn use_token(
        &self,
        token: &InviteToken,
        team_id: TeamId,
    ) -> Result<(), InviteTokenStoreError> {
        // Only an unused token is updated, so two concurrent registrations
        // cannot both consume it.
        let result = sqlx::query(
            r#"
                UPDATE registration_tokens
                SET used = TRUE, team_id = $2, use_ts = NOW()
                WHERE token = $1 AND used = FALSE
            "#,
        )
        .bind(token.as_str())
        .bind(team_id.value())
        .execute(&self.pool)
        .await
        .map_err(|e| InviteTokenStoreError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(InviteTokenStoreError::TokenAlreadyUsed);
        }

        Ok(())
    }
}
