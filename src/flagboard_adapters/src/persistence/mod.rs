pub mod dashmap_session_store;
pub mod hashmap_invite_token_store;
pub mod hashmap_team_store;
pub mod in_memory_configuration;
pub mod postgres_configuration;
pub mod postgres_invite_token_store;
pub mod postgres_team_store;
pub mod redis_session_store;
pub mod static_logo_catalog;

pub use dashmap_session_store::DashMapSessionStore;
pub use hashmap_invite_token_store::HashMapInviteTokenStore;
pub use hashmap_team_store::HashMapTeamStore;
pub use in_memory_configuration::InMemoryConfiguration;
pub use postgres_configuration::PostgresConfiguration;
pub use postgres_invite_token_store::PostgresInviteTokenStore;
pub use postgres_team_store::PostgresTeamStore;
pub use redis_session_store::RedisSessionStore;
pub use static_logo_catalog::StaticLogoCatalog;
