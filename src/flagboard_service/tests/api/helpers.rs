use std::time::Duration;

use flagboard_adapters::{
    config::{Settings, test},
    persistence::{
        DashMapSessionStore, HashMapInviteTokenStore, HashMapTeamStore, InMemoryConfiguration,
        StaticLogoCatalog,
    },
};
use flagboard_application::IndexHandler;
use flagboard_axum::SessionCookie;
use flagboard_core::{ApiResponse, ConfigKey, LogoId, Password, Shortname, TeamId};
use flagboard_service::FlagboardService;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub configuration: InMemoryConfiguration,
    pub team_store: HashMapTeamStore,
    pub token_store: HashMapInviteTokenStore,
    pub session_store: DashMapSessionStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let settings = Settings::defaults().expect("Failed to parse built-in settings");

        let configuration = InMemoryConfiguration::from_defaults(&settings.flags);
        let team_store = HashMapTeamStore::new();
        let token_store = HashMapInviteTokenStore::new();
        let session_store =
            DashMapSessionStore::new(Duration::from_secs(settings.session.ttl_seconds));
        let logo_catalog = StaticLogoCatalog::from_names(settings.logos.iter().cloned());

        let handler = IndexHandler::new(
            configuration.clone(),
            team_store.clone(),
            token_store.clone(),
            logo_catalog,
        );

        // Plain http in tests, so the cookie must not be marked Secure or
        // the client would never send it back.
        let service = FlagboardService::new(
            handler,
            session_store.clone(),
            SessionCookie::new(test::SESSION_COOKIE_NAME, false),
            settings.application.assets_dir,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            configuration,
            team_store,
            token_store,
            session_store,
        }
    }

    pub fn set_flag(&self, key: ConfigKey, value: &str) {
        self.configuration.set(key, value);
    }

    pub async fn add_team(&self, name: &str, password: &str, admin: bool) -> TeamId {
        self.team_store
            .insert_team(
                &Shortname::parse(name).unwrap(),
                Password::from(Secret::new(password.to_string())),
                LogoId::parse("owl").unwrap(),
                admin,
            )
            .await
            .expect("Failed to seed team")
    }

    pub async fn post_index(&self, form: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .post(format!("{}/ajax/index", &self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn envelope(response: reqwest::Response) -> ApiResponse {
    response
        .json::<ApiResponse>()
        .await
        .expect("Could not deserialize response body to ApiResponse")
}

pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == test::SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}
