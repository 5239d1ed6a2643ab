use flagboard_core::{
    ConfigurationError, ConfigurationStore, HandlerError, InviteToken, InviteTokenStore,
    InviteTokenStoreError, LogoCatalog, LogoCatalogError, LogoId, Password, RegistrationType,
    Roster, SessionContext, Shortname, TeamNameError, TeamStore, TeamStoreError,
};

use crate::use_cases::login_team::{LoginSuccess, LoginTeamError, LoginTeamUseCase};

/// A team registration as submitted through the index form.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub team_name: String,
    pub password: Password,
    pub token: Option<InviteToken>,
    pub logo: LogoId,
    /// Present for `register_names`, absent for plain `register_team`.
    pub roster: Option<Roster>,
}

/// Error types specific to registration use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterTeamError {
    #[error("Registration is disabled")]
    RegistrationClosed,
    #[error("Invite token missing or not valid")]
    InvalidToken,
    #[error("Invalid team name: {0}")]
    InvalidTeamName(#[from] TeamNameError),
    #[error("Team name already taken")]
    NameTaken,
    #[error("Team store error: {0}")]
    TeamStoreError(#[from] TeamStoreError),
    #[error("Invite token store error: {0}")]
    InviteTokenStoreError(#[from] InviteTokenStoreError),
    #[error("Logo catalog error: {0}")]
    LogoCatalogError(#[from] LogoCatalogError),
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("Login after registration failed: {0}")]
    Login(#[from] LoginTeamError),
}

impl From<RegisterTeamError> for HandlerError {
    fn from(error: RegisterTeamError) -> Self {
        match error {
            RegisterTeamError::RegistrationClosed
            | RegisterTeamError::InvalidToken
            | RegisterTeamError::InvalidTeamName(_)
            | RegisterTeamError::NameTaken
            | RegisterTeamError::TeamStoreError(TeamStoreError::TeamAlreadyExists)
            | RegisterTeamError::InviteTokenStoreError(
                InviteTokenStoreError::TokenNotFound | InviteTokenStoreError::TokenAlreadyUsed,
            ) => HandlerError::RegistrationDisabled,
            RegisterTeamError::Login(e) => e.into(),
            e @ (RegisterTeamError::TeamStoreError(_)
            | RegisterTeamError::InviteTokenStoreError(_)
            | RegisterTeamError::LogoCatalogError(_)
            | RegisterTeamError::ConfigurationError(_)) => HandlerError::Unexpected(e.to_string()),
        }
    }
}

/// Registration use case - creates a team and logs it straight in
pub struct RegisterTeamUseCase<'a, C, T, K, L>
where
    C: ConfigurationStore,
    T: TeamStore,
    K: InviteTokenStore,
    L: LogoCatalog,
{
    configuration: &'a C,
    team_store: &'a T,
    token_store: &'a K,
    logo_catalog: &'a L,
}

impl<'a, C, T, K, L> RegisterTeamUseCase<'a, C, T, K, L>
where
    C: ConfigurationStore,
    T: TeamStore,
    K: InviteTokenStore,
    L: LogoCatalog,
{
    pub fn new(
        configuration: &'a C,
        team_store: &'a T,
        token_store: &'a K,
        logo_catalog: &'a L,
    ) -> Self {
        Self {
            configuration,
            team_store,
            token_store,
            logo_catalog,
        }
    }

    /// Execute the registration use case
    ///
    /// # Arguments
    /// * `request` - Registration form data
    /// * `session` - Caller's session, filled in by the login that follows a
    ///   successful registration
    ///
    /// # Returns
    /// The outcome of logging the new team in, or why registration was refused
    #[tracing::instrument(
        name = "RegisterTeamUseCase::execute",
        skip_all,
        fields(team_name = %request.team_name, roster = request.roster.as_ref().map(Roster::len))
    )]
    pub async fn execute(
        &self,
        request: RegistrationRequest,
        session: &mut SessionContext,
    ) -> Result<LoginSuccess, RegisterTeamError> {
        if !self.configuration.registration().await?.is_enabled() {
            return Err(RegisterTeamError::RegistrationClosed);
        }

        let tokenized =
            self.configuration.registration_type().await? == RegistrationType::Tokenized;
        let token = if tokenized {
            Some(self.validate_token(request.token.as_ref()).await?)
        } else {
            None
        };

        let logo = self.resolve_logo(request.logo).await?;

        let shortname = Shortname::parse(&request.team_name)?;

        if self.team_store.team_exists(shortname.as_str()).await? {
            return Err(RegisterTeamError::NameTaken);
        }

        let password_hash = self.team_store.generate_hash(&request.password).await?;
        let team_id = self
            .team_store
            .create(&shortname, password_hash, &logo)
            .await?;
        tracing::info!(%team_id, shortname = %shortname, "Team created");

        if let Some(roster) = &request.roster {
            for entry in roster.entries() {
                self.team_store.add_team_data(entry, team_id).await?;
            }
        }

        if let Some(token) = token {
            self.token_store.use_token(&token, team_id).await?;
        }

        let login = LoginTeamUseCase::new(self.configuration, self.team_store);
        Ok(login.execute(team_id, &request.password, session).await?)
    }

    async fn validate_token(
        &self,
        token: Option<&InviteToken>,
    ) -> Result<InviteToken, RegisterTeamError> {
        let Some(token) = token else {
            return Err(RegisterTeamError::InvalidToken);
        };

        if !self.token_store.check(token).await? {
            return Err(RegisterTeamError::InvalidToken);
        }

        Ok(token.clone())
    }

    /// Unknown logos are swapped for a random valid one.
    async fn resolve_logo(&self, requested: LogoId) -> Result<LogoId, RegisterTeamError> {
        if self.logo_catalog.check_exists(&requested).await? {
            return Ok(requested);
        }

        let logo = self.logo_catalog.random_logo().await?;
        tracing::debug!(requested = %requested, substitute = %logo, "Unknown logo replaced");
        Ok(logo)
    }
}
