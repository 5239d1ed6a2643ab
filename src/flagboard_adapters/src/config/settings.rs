use config::{Config, ConfigError, Environment, File, FileFormat};
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::{DEFAULT_ENVIRONMENT, SETTINGS_DIR, env};

/// Defaults compiled into the binary; files and environment override them.
const BASE_SETTINGS: &str = include_str!("../../config/base.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub storage: StorageSettings,
    pub postgres: PostgresSettings,
    pub redis: RedisSettings,
    pub logos: Vec<String>,
    pub flags: FlagDefaults,
    #[serde(default)]
    pub invite_tokens: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub assets_dir: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub ttl_seconds: u64,
    pub backend: SessionBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

/// Initial values of the scoreboard toggles for the in-memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagDefaults {
    pub registration: String,
    pub registration_type: String,
    pub login: String,
    pub login_select: String,
}

impl Settings {
    /// Load settings from, in increasing priority: the built-in defaults,
    /// `config/{APP_ENVIRONMENT}.json`, and `FLAGBOARD__SECTION__KEY`
    /// environment variables. A `.env` file is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::builder()
            .add_source(
                File::with_name(&format!("{SETTINGS_DIR}/{environment}")).required(false),
            )
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
                    .separator(env::SETTINGS_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("logos")
                    .with_list_parse_key("invite_tokens")
                    .with_list_parse_key("application.allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// The built-in defaults only, ignoring files and the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder().build()?.try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(File::from_str(BASE_SETTINGS, FileFormat::Json))
    }
}
