use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use flagboard_adapters::config::SessionSettings;
use flagboard_core::SessionId;

/// Name and flags of the cookie that carries the session id.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Session id presented by the client, if it looks like one of ours.
    pub fn session_id(&self, jar: &CookieJar) -> Option<SessionId> {
        jar.get(&self.name)
            .and_then(|cookie| SessionId::parse(cookie.value()))
    }

    pub fn build(&self, session_id: &SessionId) -> Cookie<'static> {
        Cookie::build((self.name.clone(), session_id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build()
    }
}

impl From<&SessionSettings> for SessionCookie {
    fn from(settings: &SessionSettings) -> Self {
        Self::new(settings.cookie_name.clone(), settings.secure_cookie)
    }
}
