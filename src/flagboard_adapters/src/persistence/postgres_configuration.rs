use flagboard_core::{ConfigKey, ConfigurationError, ConfigurationStore};
use sqlx::PgPool;

/// Reads toggles from the `configuration` table, so admins can change them
/// without restarting the service.
#[derive(Clone)]
pub struct PostgresConfiguration {
    pool: PgPool,
}

impl PostgresConfiguration {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ConfigurationStore for PostgresConfiguration {
    #[tracing::instrument(name = "Reading configuration from PostgreSQL", skip(self))]
    async fn get(&self, key: ConfigKey) -> Result<String, ConfigurationError> {
        let value: Option<String> = sqlx::query_scalar(
            r#"
                SELECT value FROM configuration WHERE field = $1
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ConfigurationError::DatabaseError(e.to_string()))?;

        Ok(value.unwrap_or_default())
    }
}
