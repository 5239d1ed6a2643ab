use async_trait::async_trait;
use thiserror::Error;

use crate::domain::logo::LogoId;

#[derive(Debug, Error)]
pub enum LogoCatalogError {
    #[error("No logos available")]
    Empty,
}

/// Port for the set of logos a team can pick from
#[async_trait]
pub trait LogoCatalog: Send + Sync {
    async fn check_exists(&self, logo: &LogoId) -> Result<bool, LogoCatalogError>;
    async fn random_logo(&self) -> Result<LogoId, LogoCatalogError>;
}
