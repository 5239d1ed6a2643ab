//! Dispatch for the index page's AJAX endpoint.
//!
//! The endpoint accepts one form with an `action` field and serves three
//! actions: `register_team`, `register_names` and `login_team`. Raw fields
//! are first filtered into a typed [`IndexAction`], then handed to the
//! registration or login use case. Every outcome, good or bad, is rendered as
//! an [`ApiResponse`].

use flagboard_core::{
    Action, ApiResponse, ConfigurationStore, HandlerError, InputError, InviteToken,
    InviteTokenStore, LogoCatalog, LogoId, LoginSelect, Password, Roster, SessionContext, TeamId,
    TeamStore, TeamStoreError,
};
use secrecy::Secret;
use serde::Deserialize;

use crate::use_cases::{
    login_team::{LOGIN_SUCCESS_MESSAGE, LoginSuccess, LoginTeamUseCase},
    register_team::{RegisterTeamUseCase, RegistrationRequest},
};

/// Raw form fields posted to the index endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub action: Option<String>,
    pub team_id: Option<String>,
    pub teamname: Option<String>,
    pub password: Option<Secret<String>>,
    pub logo: Option<String>,
    pub token: Option<String>,
    pub names: Option<String>,
    pub emails: Option<String>,
}

/// Login form data. Which of `team_id` / `team_name` is used depends on the
/// `login_select` setting, so both are kept until dispatch.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub password: Option<Password>,
}

#[derive(Debug, Clone)]
pub enum IndexAction {
    Register(RegistrationRequest),
    Login(LoginRequest),
}

impl IndexAction {
    pub fn parse(params: IndexParams) -> Result<Self, InputError> {
        match Action::parse(params.action.as_deref()) {
            Action::RegisterTeam => Ok(IndexAction::Register(registration(params, None)?)),
            Action::RegisterNames => {
                let names = params.names.as_deref().ok_or(InputError::MissingField("names"))?;
                let emails = params
                    .emails
                    .as_deref()
                    .ok_or(InputError::MissingField("emails"))?;
                let roster = Roster::from_json(names, emails)?;
                Ok(IndexAction::Register(registration(params, Some(roster))?))
            }
            Action::LoginTeam => Ok(IndexAction::Login(LoginRequest {
                team_id: params.team_id.as_deref().and_then(parse_team_id),
                team_name: params.teamname,
                password: params.password.map(Password::from),
            })),
            Action::None => Err(InputError::UnknownAction),
        }
    }
}

fn registration(
    params: IndexParams,
    roster: Option<Roster>,
) -> Result<RegistrationRequest, InputError> {
    let team_name = params.teamname.ok_or(InputError::MissingField("teamname"))?;
    let password = params
        .password
        .map(Password::from)
        .ok_or(InputError::MissingField("password"))?;
    let logo = params.logo.ok_or(InputError::MissingField("logo"))?;
    let logo = LogoId::parse(logo).map_err(|_| InputError::InvalidLogo)?;

    Ok(RegistrationRequest {
        team_name,
        password,
        token: InviteToken::from_form_field(params.token.as_deref()),
        logo,
        roster,
    })
}

/// Integer filter: optional sign, surrounding whitespace ignored, no leading
/// zeros.
fn parse_team_id(raw: &str) -> Option<TeamId> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    raw.parse::<i64>().ok().map(TeamId::new)
}

/// Serves the index endpoint's actions.
///
/// Owns its collaborators; all of them are cheap to clone and share state
/// internally, so one handler is built at startup and cloned into each route.
#[derive(Clone)]
pub struct IndexHandler<C, T, K, L> {
    configuration: C,
    team_store: T,
    token_store: K,
    logo_catalog: L,
}

impl<C, T, K, L> IndexHandler<C, T, K, L>
where
    C: ConfigurationStore,
    T: TeamStore,
    K: InviteTokenStore,
    L: LogoCatalog,
{
    pub fn new(configuration: C, team_store: T, token_store: K, logo_catalog: L) -> Self {
        Self {
            configuration,
            team_store,
            token_store,
            logo_catalog,
        }
    }

    /// Handle one request. Never fails: errors become error envelopes.
    #[tracing::instrument(name = "IndexHandler::handle", skip_all, fields(action = ?params.action))]
    pub async fn handle(&self, params: IndexParams, session: &mut SessionContext) -> ApiResponse {
        match self.dispatch(params, session).await {
            Ok(success) => ApiResponse::ok(LOGIN_SUCCESS_MESSAGE, success.redirect),
            Err(error) => {
                if error.is_unexpected() {
                    tracing::error!(error = %error, "Request failed");
                } else {
                    tracing::info!(error = %error, "Request refused");
                }
                error.to_response()
            }
        }
    }

    async fn dispatch(
        &self,
        params: IndexParams,
        session: &mut SessionContext,
    ) -> Result<LoginSuccess, HandlerError> {
        match IndexAction::parse(params)? {
            IndexAction::Register(request) => Ok(RegisterTeamUseCase::new(
                &self.configuration,
                &self.team_store,
                &self.token_store,
                &self.logo_catalog,
            )
            .execute(request, session)
            .await?),
            IndexAction::Login(request) => self.login(request, session).await,
        }
    }

    async fn login(
        &self,
        request: LoginRequest,
        session: &mut SessionContext,
    ) -> Result<LoginSuccess, HandlerError> {
        let login_select = self
            .configuration
            .login_select()
            .await
            .map_err(|e| HandlerError::Unexpected(e.to_string()))?;

        let team_id = match login_select {
            LoginSelect::ById => request.team_id.ok_or(InputError::InvalidTeamId)?,
            LoginSelect::ByName => {
                let team_name = request
                    .team_name
                    .ok_or(InputError::MissingField("teamname"))?;
                self.resolve_team_name(&team_name).await?
            }
        };

        let password = request
            .password
            .ok_or(InputError::MissingField("password"))?;

        Ok(LoginTeamUseCase::new(&self.configuration, &self.team_store)
            .execute(team_id, &password, session)
            .await?)
    }

    async fn resolve_team_name(&self, team_name: &str) -> Result<TeamId, HandlerError> {
        let unexpected = |e: TeamStoreError| HandlerError::Unexpected(e.to_string());

        if !self
            .team_store
            .team_exists(team_name)
            .await
            .map_err(unexpected)?
        {
            return Err(HandlerError::LoginFailed);
        }

        match self.team_store.get_team_by_name(team_name).await {
            Ok(team) => Ok(team.id()),
            Err(TeamStoreError::TeamNotFound) => Err(HandlerError::LoginFailed),
            Err(e) => Err(unexpected(e)),
        }
    }
}
