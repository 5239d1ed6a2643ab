use std::sync::Arc;

use flagboard_core::{LogoCatalog, LogoCatalogError, LogoId};
use rand::seq::IndexedRandom;

/// Fixed set of logos, loaded from settings at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticLogoCatalog {
    logos: Arc<Vec<LogoId>>,
}

impl StaticLogoCatalog {
    pub fn new(logos: Vec<LogoId>) -> Self {
        Self {
            logos: Arc::new(logos),
        }
    }

    /// Builds the catalog from raw names, skipping any that are not valid
    /// logo identifiers.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let logos = names
            .into_iter()
            .filter_map(|name| {
                let name = name.into();
                LogoId::parse(name.clone())
                    .inspect_err(|_| tracing::warn!(logo = %name, "Skipping invalid logo name"))
                    .ok()
            })
            .collect();
        Self::new(logos)
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

#[async_trait::async_trait]
impl LogoCatalog for StaticLogoCatalog {
    async fn check_exists(&self, logo: &LogoId) -> Result<bool, LogoCatalogError> {
        Ok(self.logos.contains(logo))
    }

    async fn random_logo(&self) -> Result<LogoId, LogoCatalogError> {
        self.logos
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(LogoCatalogError::Empty)
    }
}
