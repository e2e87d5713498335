use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use authgate_common::traits::auth_traits::Authenticator;

/// Name-to-strategy map populated during process initialization and
/// read-only afterwards. Backed by a sharded concurrent map so steady-state
/// resolution never takes a global lock.
pub struct AuthenticatorRegistry {
    strategies: DashMap<String, Arc<dyn Authenticator>>,
}

impl AuthenticatorRegistry {
    pub fn new() -> Self {
        Self {
            strategies: DashMap::new(),
        }
    }

    /// Associates `name` with `strategy`. The first registration for a name
    /// wins; a duplicate is ignored so multiple initialization paths can
    /// register the same built-in without tripping over each other.
    pub fn register(&self, name: &str, strategy: Arc<dyn Authenticator>) {
        match self.strategies.entry(name.to_string()) {
            Entry::Occupied(_) => {
                info!("authenticator {} has been registered", name);
            }
            Entry::Vacant(slot) => {
                slot.insert(strategy);
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Authenticator>> {
        self.strategies.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Registered mode names, sorted, for diagnostics surfaces.
    pub fn registered_modes(&self) -> Vec<String> {
        let mut modes: Vec<String> = self
            .strategies
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        modes.sort();
        modes
    }
}

impl Default for AuthenticatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
