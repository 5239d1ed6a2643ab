use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use flagboard_adapters::{
    config::{SessionBackend, Settings, StorageBackend},
    persistence::{
        DashMapSessionStore, HashMapInviteTokenStore, HashMapTeamStore, InMemoryConfiguration,
        PostgresConfiguration, PostgresInviteTokenStore, PostgresTeamStore, RedisSessionStore,
        StaticLogoCatalog,
    },
};
use flagboard_application::IndexHandler;
use flagboard_axum::SessionCookie;
use flagboard_core::{
    ConfigurationStore, InviteToken, InviteTokenStore, LogoCatalog, SessionStore, TeamStore,
};
use flagboard_service::{
    FlagboardService,
    helpers::{configure_postgresql, configure_redis},
};
use tokio::sync::RwLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let logo_catalog = StaticLogoCatalog::from_names(settings.logos.iter().cloned());
    let invite_tokens = invite_tokens(&settings);

    match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, teams are lost on restart");

            let token_store = HashMapInviteTokenStore::new();
            for token in invite_tokens {
                token_store.add_token(token).await;
            }

            with_session_store(
                &settings,
                InMemoryConfiguration::from_defaults(&settings.flags),
                HashMapTeamStore::new(),
                token_store,
                logo_catalog,
            )
            .await
        }
        StorageBackend::Postgres => {
            let pg_pool = configure_postgresql(&settings.postgres).await?;

            let token_store = PostgresInviteTokenStore::new(pg_pool.clone());
            for token in &invite_tokens {
                token_store.add_token(token).await?;
            }

            with_session_store(
                &settings,
                PostgresConfiguration::new(pg_pool.clone()),
                PostgresTeamStore::new(pg_pool),
                token_store,
                logo_catalog,
            )
            .await
        }
    }
}

async fn with_session_store<C, T, K, L>(
    settings: &Settings,
    configuration: C,
    team_store: T,
    token_store: K,
    logo_catalog: L,
) -> Result<()>
where
    C: ConfigurationStore + Clone + 'static,
    T: TeamStore + Clone + 'static,
    K: InviteTokenStore + Clone + 'static,
    L: LogoCatalog + Clone + 'static,
{
    let handler = IndexHandler::new(configuration, team_store, token_store, logo_catalog);

    match settings.session.backend {
        SessionBackend::Memory => {
            let ttl = Duration::from_secs(settings.session.ttl_seconds);
            serve(settings, handler, DashMapSessionStore::new(ttl)).await
        }
        SessionBackend::Redis => {
            let redis_conn = Arc::new(RwLock::new(configure_redis(&settings.redis)?));
            let session_store = RedisSessionStore::new(redis_conn, settings.session.ttl_seconds);
            serve(settings, handler, session_store).await
        }
    }
}

async fn serve<C, T, K, L, S>(
    settings: &Settings,
    handler: IndexHandler<C, T, K, L>,
    session_store: S,
) -> Result<()>
where
    C: ConfigurationStore + Clone + 'static,
    T: TeamStore + Clone + 'static,
    K: InviteTokenStore + Clone + 'static,
    L: LogoCatalog + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let service = FlagboardService::new(
        handler,
        session_store,
        SessionCookie::from(&settings.session),
        settings.application.assets_dir.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting flagboard...");

    service
        .run_standalone(
            listener,
            Some(settings.application.allowed_origins.clone()),
        )
        .await?;

    Ok(())
}

fn invite_tokens(settings: &Settings) -> Vec<InviteToken> {
    settings
        .invite_tokens
        .iter()
        .filter_map(|raw| {
            InviteToken::parse(raw.as_str())
                .inspect_err(|_| tracing::warn!(token = %raw, "Skipping malformed invite token"))
                .ok()
        })
        .collect()
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
