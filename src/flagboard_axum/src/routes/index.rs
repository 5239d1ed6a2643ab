//! `POST /ajax/index`: team registration and login.

use std::net::SocketAddr;

use axum::{
    Form, Json,
    extract::{ConnectInfo, State, rejection::FormRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use flagboard_application::{IndexHandler, IndexParams};
use flagboard_core::{
    ApiResponse, ConfigurationStore, InviteTokenStore, LogoCatalog, SessionContext, SessionId,
    SessionStore, TeamSession, TeamStore,
};

use crate::cookie::SessionCookie;

pub type IndexState<C, T, K, L, S> = (IndexHandler<C, T, K, L>, S, SessionCookie);

/// Every outcome is a JSON envelope. Requests the handler refuses still get
/// a 200; only faults of the service itself become a 500.
#[tracing::instrument(name = "Index", skip_all, fields(remote_addr = %remote_addr))]
pub async fn index<C, T, K, L, S>(
    State((handler, sessions, session_cookie)): State<IndexState<C, T, K, L, S>>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    form: Result<Form<IndexParams>, FormRejection>,
) -> (StatusCode, CookieJar, Json<ApiResponse>)
where
    C: ConfigurationStore + Clone + 'static,
    T: TeamStore + Clone + 'static,
    K: InviteTokenStore + Clone + 'static,
    L: LogoCatalog + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let params = match form {
        Ok(Form(params)) => params,
        Err(rejection) => {
            // Unreadable bodies carry no action and are answered as such.
            tracing::debug!(error = %rejection, "Rejected form body");
            IndexParams::default()
        }
    };

    let existing = load_session(&sessions, &session_cookie, &jar).await;
    let mut context = SessionContext::new(remote_addr.ip(), existing);

    let mut response = handler.handle(params, &mut context).await;
    let mut jar = jar;

    if let Some(session) = context.established() {
        match save_session(&sessions, session).await {
            Some(session_id) => jar = jar.add(session_cookie.build(&session_id)),
            None => response = ApiResponse::internal_error(),
        }
    }

    (status_for(&response), jar, Json(response))
}

async fn load_session<S: SessionStore>(
    sessions: &S,
    session_cookie: &SessionCookie,
    jar: &CookieJar,
) -> Option<TeamSession> {
    let session_id = session_cookie.session_id(jar)?;

    match sessions.load(&session_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load session, continuing without one");
            None
        }
    }
}

async fn save_session<S: SessionStore>(sessions: &S, session: &TeamSession) -> Option<SessionId> {
    let session_id = SessionId::new();

    match sessions.save(&session_id, session).await {
        Ok(()) => Some(session_id),
        Err(e) => {
            tracing::error!(error = %e, team_id = %session.team_id, "Failed to save session");
            None
        }
    }
}

fn status_for(response: &ApiResponse) -> StatusCode {
    if response.is_internal_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}
