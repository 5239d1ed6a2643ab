use flagboard_core::{
    ConfigurationError, ConfigurationStore, HandlerError, Password, RedirectTarget,
    SessionContext, TeamId, TeamStore, TeamStoreError,
};

/// Success message expected verbatim by the scoreboard front end.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login succesful";

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub team_id: TeamId,
    pub redirect: RedirectTarget,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginTeamError {
    #[error("Login is disabled")]
    LoginClosed,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Team store error: {0}")]
    TeamStoreError(TeamStoreError),
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
}

impl From<TeamStoreError> for LoginTeamError {
    fn from(error: TeamStoreError) -> Self {
        match error {
            TeamStoreError::TeamNotFound | TeamStoreError::IncorrectPassword => {
                LoginTeamError::InvalidCredentials
            }
            e => LoginTeamError::TeamStoreError(e),
        }
    }
}

impl From<LoginTeamError> for HandlerError {
    fn from(error: LoginTeamError) -> Self {
        match error {
            LoginTeamError::LoginClosed | LoginTeamError::InvalidCredentials => {
                HandlerError::LoginDisabled
            }
            LoginTeamError::TeamStoreError(e) => HandlerError::Unexpected(e.to_string()),
            LoginTeamError::ConfigurationError(e) => HandlerError::Unexpected(e.to_string()),
        }
    }
}

/// Login use case - checks a team's credentials and opens its session
pub struct LoginTeamUseCase<'a, C, T>
where
    C: ConfigurationStore,
    T: TeamStore,
{
    configuration: &'a C,
    team_store: &'a T,
}

impl<'a, C, T> LoginTeamUseCase<'a, C, T>
where
    C: ConfigurationStore,
    T: TeamStore,
{
    pub fn new(configuration: &'a C, team_store: &'a T) -> Self {
        Self {
            configuration,
            team_store,
        }
    }

    /// Execute the login use case
    ///
    /// On success a session is written into `session` unless the caller
    /// already has one. The redirect target depends on the team's admin flag.
    #[tracing::instrument(name = "LoginTeamUseCase::execute", skip(self, password, session))]
    pub async fn execute(
        &self,
        team_id: TeamId,
        password: &Password,
        session: &mut SessionContext,
    ) -> Result<LoginSuccess, LoginTeamError> {
        if !self.configuration.login().await?.is_enabled() {
            return Err(LoginTeamError::LoginClosed);
        }

        let team = self
            .team_store
            .verify_credentials(team_id, password)
            .await?;

        if session.establish(&team) {
            tracing::info!(team_id = %team.id(), "Session established");
        }

        let redirect = if team.is_admin() {
            RedirectTarget::Admin
        } else {
            RedirectTarget::Game
        };

        Ok(LoginSuccess {
            team_id: team.id(),
            redirect,
        })
    }
}
