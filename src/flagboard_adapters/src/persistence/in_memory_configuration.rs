use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use flagboard_core::{ConfigKey, ConfigurationError, ConfigurationStore};

use crate::config::FlagDefaults;

/// Configuration held in memory. Readers see a consistent snapshot; `set`
/// swaps in a new one, so toggles can be flipped while serving requests.
#[derive(Clone, Default)]
pub struct InMemoryConfiguration {
    values: Arc<ArcSwap<HashMap<ConfigKey, String>>>,
}

impl InMemoryConfiguration {
    pub fn new(values: HashMap<ConfigKey, String>) -> Self {
        Self {
            values: Arc::new(ArcSwap::from_pointee(values)),
        }
    }

    pub fn from_defaults(defaults: &FlagDefaults) -> Self {
        Self::new(HashMap::from([
            (ConfigKey::Registration, defaults.registration.clone()),
            (ConfigKey::RegistrationType, defaults.registration_type.clone()),
            (ConfigKey::Login, defaults.login.clone()),
            (ConfigKey::LoginSelect, defaults.login_select.clone()),
        ]))
    }

    pub fn set(&self, key: ConfigKey, value: impl Into<String>) {
        let value = value.into();
        self.values.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.insert(key, value.clone());
            next
        });
    }
}

#[async_trait::async_trait]
impl ConfigurationStore for InMemoryConfiguration {
    async fn get(&self, key: ConfigKey) -> Result<String, ConfigurationError> {
        Ok(self.values.load().get(&key).cloned().unwrap_or_default())
    }
}
