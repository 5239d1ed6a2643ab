//! Uniform response envelope returned by every AJAX action.
//!
//! The scoreboard front end reads `result` to decide between success and
//! failure and `redirect` to know where to go next:
//!
//! ```json
//! {"result": "OK", "message": "Login succesful", "redirect": "game"}
//! {"result": "ERROR", "message": "Registration failed", "redirect": "registration"}
//! ```

use serde::{Deserialize, Serialize};

/// Client-facing message for failures of the service itself.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseResult {
    Ok,
    Error,
}

/// Where the client should navigate after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Admin,
    Game,
}

impl RedirectTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectTarget::Admin => "admin",
            RedirectTarget::Game => "game",
        }
    }
}

/// Which form an error belongs to, so the client can show it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Registration,
    Login,
    Index,
}

impl ErrorContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorContext::Registration => "registration",
            ErrorContext::Login => "login",
            ErrorContext::Index => "index",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub result: ResponseResult,
    pub message: String,
    pub redirect: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, redirect: RedirectTarget) -> Self {
        Self {
            result: ResponseResult::Ok,
            message: message.into(),
            redirect: redirect.as_str().to_string(),
        }
    }

    pub fn error(message: impl Into<String>, context: ErrorContext) -> Self {
        Self {
            result: ResponseResult::Error,
            message: message.into(),
            redirect: context.as_str().to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Self::error(INTERNAL_ERROR_MESSAGE, ErrorContext::Index)
    }

    pub fn is_ok(&self) -> bool {
        self.result == ResponseResult::Ok
    }

    /// True for envelopes that report a fault of the service rather than a
    /// refused request. The HTTP layer answers those with a 500.
    pub fn is_internal_error(&self) -> bool {
        self.result == ResponseResult::Error && self.message == INTERNAL_ERROR_MESSAGE
    }
}
