use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use flagboard_adapters::config::AllowedOrigins;
use flagboard_application::IndexHandler;
use flagboard_axum::{
    SessionCookie,
    routes::{health, index},
};
use flagboard_core::{ConfigurationStore, InviteTokenStore, LogoCatalog, SessionStore, TeamStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The scoreboard's public HTTP surface: the index AJAX endpoint, a health
/// probe and the static front end.
pub struct FlagboardService {
    router: Router,
}

impl FlagboardService {
    /// Stores are cheap to clone and share their state internally, so the
    /// handler and session store are cloned into the route state as they are.
    pub fn new<C, T, K, L, S>(
        handler: IndexHandler<C, T, K, L>,
        session_store: S,
        session_cookie: SessionCookie,
        assets_dir: String,
    ) -> Self
    where
        C: ConfigurationStore + Clone + 'static,
        T: TeamStore + Clone + 'static,
        K: InviteTokenStore + Clone + 'static,
        L: LogoCatalog + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let assets_service =
            ServeDir::new(assets_dir.clone()).fallback(ServeFile::new(assets_dir + "/index.html"));

        let router = Router::new()
            .route("/ajax/index", post(index::<C, T, K, L, S>))
            .with_state((handler, session_store, session_cookie))
            .route("/health", get(health))
            .fallback_service(assets_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Router that can be mounted into a larger application. Cross-origin
    /// requests are only answered for the listed origins.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Flagboard listening on {}", listener.local_addr()?);

        // The index route reads the peer address for the session record.
        axum_server::Server::<SocketAddr>::from_listener(listener)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .await
    }
}
