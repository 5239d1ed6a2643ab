use thiserror::Error;

use crate::{
    domain::roster::RosterError,
    response::{ApiResponse, ErrorContext, INTERNAL_ERROR_MESSAGE},
};

/// Why a request could not be turned into a typed action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown action")]
    UnknownAction,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("team_id is not an integer")]
    InvalidTeamId,
    #[error("Invalid logo identifier")]
    InvalidLogo,
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),
}

/// Every way a registration or login request can end without success.
///
/// None of these escape the handler: each one renders as an error
/// [`ApiResponse`] through [`HandlerError::to_response`].
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Registration failed")]
    RegistrationDisabled,
    #[error("Login failed")]
    LoginDisabled,
    #[error("Login failed: unknown team")]
    LoginFailed,
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl HandlerError {
    /// Message shown to the client. Details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            HandlerError::RegistrationDisabled => "Registration failed",
            HandlerError::LoginDisabled | HandlerError::LoginFailed => "Login failed",
            HandlerError::InvalidInput(InputError::UnknownAction) => "Invalid action",
            HandlerError::InvalidInput(_) => "Invalid input",
            HandlerError::Unexpected(_) => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn context(&self) -> ErrorContext {
        match self {
            HandlerError::RegistrationDisabled => ErrorContext::Registration,
            HandlerError::LoginDisabled | HandlerError::LoginFailed => ErrorContext::Login,
            HandlerError::InvalidInput(_) | HandlerError::Unexpected(_) => ErrorContext::Index,
        }
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, HandlerError::Unexpected(_))
    }

    pub fn to_response(&self) -> ApiResponse {
        ApiResponse::error(self.message(), self.context())
    }
}

impl PartialEq for HandlerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::RegistrationDisabled, Self::RegistrationDisabled) => true,
            (Self::LoginDisabled, Self::LoginDisabled) => true,
            (Self::LoginFailed, Self::LoginFailed) => true,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}
