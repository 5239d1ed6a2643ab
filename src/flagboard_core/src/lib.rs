pub mod domain;
pub mod error;
pub mod ports;
pub mod response;

// Re-export commonly used types for convenience
pub use domain::{
    action::Action,
    flags::{ConfigKey, LoginSelect, RegistrationType, Toggle},
    invite_token::{InviteToken, InviteTokenError},
    logo::{LogoError, LogoId},
    password::{Password, PasswordHash},
    roster::{Roster, RosterEntry, RosterError},
    session::{CsrfToken, SessionContext, SessionId, TeamSession},
    team::{Team, TeamId},
    team_name::{SHORTNAME_MAX_CHARS, Shortname, TeamNameError},
};

pub use error::{HandlerError, InputError};

pub use ports::{
    repositories::{
        ConfigurationError, ConfigurationStore, InviteTokenStore, InviteTokenStoreError,
        SessionStore, SessionStoreError, TeamStore, TeamStoreError,
    },
    services::{LogoCatalog, LogoCatalogError},
};

pub use response::{
    ApiResponse, ErrorContext, INTERNAL_ERROR_MESSAGE, RedirectTarget, ResponseResult,
};
