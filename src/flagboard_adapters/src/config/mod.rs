pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, FlagDefaults, PostgresSettings, RedisSettings,
    SessionBackend, SessionSettings, Settings, StorageBackend, StorageSettings,
};
