use flagboard_core::{
    LogoId, Password, PasswordHash, RosterEntry, Shortname, Team, TeamId, TeamStore,
    TeamStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::password_hashing::{compute_password_hash, verify_password_hash};

#[derive(Clone)]
pub struct PostgresTeamStore {
    pool: PgPool,
}

impl PostgresTeamStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresTeamStore { pool }
    }
}

fn unexpected(e: impl ToString) -> TeamStoreError {
    TeamStoreError::UnexpectedError(e.to_string())
}

/// Maps constraint violations to the domain errors they stand for. Any other
/// failure, including other constraint kinds, is unexpected.
fn team_store_error(e: sqlx::Error) -> TeamStoreError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => TeamStoreError::TeamAlreadyExists,
        Some(db_err) if db_err.is_foreign_key_violation() => TeamStoreError::TeamNotFound,
        _ => unexpected(e),
    }
}

fn team_from_row(row: &PgRow) -> Result<Team, TeamStoreError> {
    let logo: String = row.try_get("logo").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;

    Ok(Team::new(
        TeamId::new(row.try_get("id").map_err(unexpected)?),
        row.try_get("name").map_err(unexpected)?,
        PasswordHash::new(Secret::from(password_hash)),
        LogoId::parse(logo).map_err(unexpected)?,
        row.try_get("admin").map_err(unexpected)?,
    ))
}

#[async_trait::async_trait]
impl TeamStore for PostgresTeamStore {
    #[tracing::instrument(name = "Checking team name in PostgreSQL", skip_all)]
    async fn team_exists(&self, name: &str) -> Result<bool, TeamStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (SELECT 1 FROM teams WHERE LOWER(name) = LOWER($1))
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)
    }

    #[tracing::instrument(name = "Retrieving team from PostgreSQL", skip_all)]
    async fn get_team_by_name(&self, name: &str) -> Result<Team, TeamStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, password_hash, logo, admin
                FROM teams
                WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(TeamStoreError::TeamNotFound);
        };

        team_from_row(&row)
    }

    async fn generate_hash(&self, password: &Password) -> Result<PasswordHash, TeamStoreError> {
        compute_password_hash(password.clone())
            .await
            .map_err(TeamStoreError::from)
    }

    #[tracing::instrument(name = "Adding team to PostgreSQL", skip_all)]
    async fn create(
        &self,
        name: &Shortname,
        password_hash: PasswordHash,
        logo: &LogoId,
    ) -> Result<TeamId, TeamStoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO teams (name, password_hash, logo, admin)
                VALUES ($1, $2, $3, FALSE)
                RETURNING id
            "#,
        )
        .bind(name.as_str())
        .bind(password_hash.as_ref().expose_secret())
        .bind(logo.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(team_store_error)?;

        Ok(TeamId::new(id))
    }

    #[tracing::instrument(name = "Adding team data to PostgreSQL", skip_all)]
    async fn add_team_data(
        &self,
        entry: &RosterEntry,
        team_id: TeamId,
    ) -> Result<(), TeamStoreError> {
        sqlx::query(
            r#"
                INSERT INTO teams_data (team_id, name, email)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(team_id.value())
        .bind(&entry.name)
        .bind(&entry.email)
        .execute(&self.pool)
        .await
        .map_err(team_store_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Validating team credentials in PostgreSQL", skip_all)]
    async fn verify_credentials(
        &self,
        team_id: TeamId,
        password: &Password,
    ) -> Result<Team, TeamStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, password_hash, logo, admin
                FROM teams
                WHERE id = $1
            "#,
        )
        .bind(team_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(TeamStoreError::TeamNotFound);
        };
        let team = team_from_row(&row)?;

        verify_password_hash(team.password_hash().clone(), password.clone()).await?;

        Ok(team)
    }
}
