use flagboard_adapters::config::{PostgresSettings, RedisSettings};
use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and bring the schema up to date.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

    Ok(pg_pool)
}

pub fn configure_redis(settings: &RedisSettings) -> RedisResult<redis::Connection> {
    get_redis_client(&settings.host_name)?.get_connection()
}

pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
