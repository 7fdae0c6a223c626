//! In-memory settings stores

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;

use crate::config::Config;
use crate::contract::{SettingScope, SettingsError};
use crate::domain::{ScopeStores, SettingsStore};

/// Settings store backed by a shared in-memory map
///
/// Clones share the same map, so a host can keep a handle for inspection
/// while the repository owns another.
#[derive(Clone, Debug, Default)]
pub struct InMemorySettingsStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Copy of every stored key and value
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.data.read().clone()
    }

    /// Remove every stored value
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// Insert many values at once, replacing existing keys
    pub fn extend<I, K, V>(&self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = self.data.write();
        for (key, value) in values {
            data.insert(key.into(), value.into());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemorySettingsStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let store = Self::new();
        store.extend(iter);
        store
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: String) -> Result<()> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.data.write().remove(key).is_some())
    }
}

/// One in-memory store for every scope
///
/// Useful for embedding and tests: each scope gets its own map and the
/// handles stay available for direct inspection.
#[derive(Clone, Debug, Default)]
pub struct InMemoryScopeStores {
    instance_on_page: InMemorySettingsStore,
    component: InMemorySettingsStore,
    page: InMemorySettingsStore,
    site: InMemorySettingsStore,
    installation: InMemorySettingsStore,
}

impl InMemoryScopeStores {
    /// Create empty stores for every scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stores preloaded with the configured seed values
    pub fn from_config(config: &Config) -> Result<Self, SettingsError> {
        let stores = Self::new();
        for (scope, values) in config.seed_by_scope()? {
            stores.store(scope).extend(values.clone());
            tracing::debug!(scope = %scope, count = values.len(), "seeded in-memory settings store");
        }
        Ok(stores)
    }

    /// Store handle for `scope`
    pub fn store(&self, scope: SettingScope) -> &InMemorySettingsStore {
        match scope {
            SettingScope::InstanceOnPage => &self.instance_on_page,
            SettingScope::Component => &self.component,
            SettingScope::Page => &self.page,
            SettingScope::Site => &self.site,
            SettingScope::Installation => &self.installation,
        }
    }

    /// Resolution table binding every scope to its in-memory store
    pub fn scope_stores(&self) -> ScopeStores {
        SettingScope::ALL
            .into_iter()
            .fold(ScopeStores::new(), |stores, scope| {
                stores.with_store(scope, Arc::new(self.store(scope).clone()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreResolver;

    #[test]
    fn test_store_read_write_remove() {
        let store = InMemorySettingsStore::new();
        assert!(!store.contains("a").unwrap());
        assert_eq!(store.read("a").unwrap(), None);

        store.write("a", "1".to_string()).unwrap();
        assert!(store.contains("a").unwrap());
        assert_eq!(store.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 1);

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_data() {
        let store = InMemorySettingsStore::new();
        let handle = store.clone();
        store.write("k", "v".to_string()).unwrap();
        assert_eq!(handle.snapshot().get("k").map(String::as_str), Some("v"));

        handle.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_iter() {
        let store: InMemorySettingsStore = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_scope_stores_are_disjoint() {
        let stores = InMemoryScopeStores::new();
        let table = stores.scope_stores();
        assert_eq!(table.bound_scopes(), SettingScope::ALL.to_vec());

        table
            .resolve(SettingScope::Page)
            .unwrap()
            .write("Title", "Home".to_string())
            .unwrap();

        assert_eq!(stores.store(SettingScope::Page).len(), 1);
        for scope in SettingScope::ALL {
            if scope != SettingScope::Page {
                assert!(stores.store(scope).is_empty());
            }
        }
    }

    #[test]
    fn test_from_config_seeds_scopes() {
        let config = Config::from_yaml(
            "seed:\n  installation:\n    SmtpHost: mail.example.com\n  page:\n    Title: Home\n",
        )
        .unwrap();
        let stores = InMemoryScopeStores::from_config(&config).unwrap();

        assert_eq!(
            stores
                .store(SettingScope::Installation)
                .read("SmtpHost")
                .unwrap()
                .as_deref(),
            Some("mail.example.com")
        );
        assert_eq!(stores.store(SettingScope::Page).len(), 1);
        assert!(stores.store(SettingScope::Site).is_empty());
    }
}
