//! # Flagboard
//!
//! Team registration and login for a CTF scoreboard. This facade re-exports
//! the public API of the workspace crates so an embedding application needs
//! a single dependency.
//!
//! ## Structure
//!
//! - **Domain types**: `Shortname`, `Team`, `InviteToken`, `Roster`, `ApiResponse`, ...
//! - **Ports**: `TeamStore`, `InviteTokenStore`, `ConfigurationStore`, `SessionStore`, `LogoCatalog`
//! - **Use cases**: `RegisterTeamUseCase`, `LoginTeamUseCase`, and the `IndexHandler` dispatcher
//! - **Adapters**: in-memory, PostgreSQL and Redis implementations of the ports
//! - **Service**: `FlagboardService`, the HTTP entry point

/// Domain types and value objects
pub mod core {
    pub use flagboard_core::*;
}

pub use flagboard_core::{
    ApiResponse, ConfigKey, ErrorContext, HandlerError, InputError, InviteToken, LogoId,
    Password, RedirectTarget, ResponseResult, Roster, RosterEntry, SessionContext, SessionId,
    Shortname, Team, TeamId, TeamSession,
};

/// Port definitions
pub mod repositories {
    pub use flagboard_core::{
        ConfigurationError, ConfigurationStore, InviteTokenStore, InviteTokenStoreError,
        LogoCatalog, LogoCatalogError, SessionStore, SessionStoreError, TeamStore,
        TeamStoreError,
    };
}

pub use repositories::*;

/// Application use cases
pub mod use_cases {
    pub use flagboard_application::*;
}

pub use flagboard_application::{
    IndexHandler, IndexParams, LoginTeamUseCase, RegisterTeamUseCase, RegistrationRequest,
};

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use flagboard_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use flagboard_adapters::config::*;
    }

    /// Axum routes and cookie handling
    pub mod http {
        pub use flagboard_axum::*;
    }
}

pub use flagboard_adapters::persistence::{
    DashMapSessionStore, HashMapInviteTokenStore, HashMapTeamStore, InMemoryConfiguration,
    PostgresConfiguration, PostgresInviteTokenStore, PostgresTeamStore, RedisSessionStore,
    StaticLogoCatalog,
};

/// HTTP service
pub use flagboard_service::{
    FlagboardService,
    helpers::{configure_postgresql, configure_redis, get_redis_client},
};

pub use flagboard_axum::SessionCookie;

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

pub use secrecy::{ExposeSecret, Secret};

pub use http;
