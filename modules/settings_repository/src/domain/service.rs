//! Settings repository - scope dispatch and typed conversion

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::contract::{
    DefaultConverter, Setting, SettingConverter, SettingScope, SettingValue, SettingsApi,
    SettingsError, SettingsResult,
};

use super::context::StoreResolver;
use super::store::SettingsStore;
use super::validation::{validate_setting_name, validate_value_len};

/// Typed access to settings, dispatched to the store of each setting's scope
///
/// Holds nothing but the resolver handed over by the host, so clones are
/// cheap and share the same stores.
#[derive(Clone)]
pub struct SettingsRepository {
    resolver: Arc<dyn StoreResolver>,
    max_value_len: usize,
}

impl SettingsRepository {
    /// Create a repository over the stores of the current context
    pub fn new<R>(resolver: R) -> Self
    where
        R: StoreResolver + 'static,
    {
        Self::from_resolver(Arc::new(resolver))
    }

    /// Create a repository from a shared resolver
    pub fn from_resolver(resolver: Arc<dyn StoreResolver>) -> Self {
        Self {
            resolver,
            max_value_len: Config::default().max_value_len,
        }
    }

    /// Apply repository configuration
    pub fn with_config(mut self, config: &Config) -> Self {
        self.max_value_len = config.max_value_len;
        self
    }

    fn store_for(&self, scope: SettingScope) -> SettingsResult<Arc<dyn SettingsStore>> {
        let store = self
            .resolver
            .resolve(scope)
            .ok_or(SettingsError::InvalidOperation { scope })?;
        tracing::trace!(scope = %scope, "resolved settings store");
        Ok(store)
    }

    fn read_raw<T>(&self, setting: &Setting<T>) -> SettingsResult<Option<String>> {
        validate_setting_name(setting.name())?;
        let store = self.store_for(setting.scope())?;
        let raw = store.read(setting.name()).map_err(SettingsError::Store)?;
        tracing::trace!(setting = %setting, found = raw.is_some(), "read setting");
        Ok(raw)
    }

    fn read_parsed<T, P>(&self, setting: &Setting<T>, parse: P) -> SettingsResult<T>
    where
        T: Clone,
        P: FnOnce(&str) -> anyhow::Result<T>,
    {
        match self.read_raw(setting)? {
            Some(raw) => parse(&raw).map_err(SettingsError::Conversion),
            None => Ok(setting.default_value().clone()),
        }
    }

    fn write_raw<T>(&self, setting: &Setting<T>, raw: Option<String>) -> SettingsResult<()> {
        if let Some(raw) = &raw {
            validate_value_len(setting.name(), raw, self.max_value_len)?;
        }
        let store = self.store_for(setting.scope())?;
        match raw {
            Some(raw) => {
                store
                    .write(setting.name(), raw)
                    .map_err(SettingsError::Store)?;
                tracing::debug!(setting = %setting, "stored setting value");
            }
            None => {
                let removed = store.remove(setting.name()).map_err(SettingsError::Store)?;
                tracing::debug!(setting = %setting, removed, "absent value cleared setting");
            }
        }
        Ok(())
    }
}

impl SettingsApi for SettingsRepository {
    fn has_value<T>(&self, setting: &Setting<T>) -> SettingsResult<bool> {
        validate_setting_name(setting.name())?;
        let store = self.store_for(setting.scope())?;
        store.contains(setting.name()).map_err(SettingsError::Store)
    }

    fn get_value<T>(&self, setting: &Setting<T>) -> SettingsResult<T>
    where
        T: SettingValue + Clone,
    {
        self.get_value_using(setting, &DefaultConverter)
    }

    fn get_value_with<T, E, F>(&self, setting: &Setting<T>, converter: F) -> SettingsResult<T>
    where
        T: Clone,
        F: Fn(&str) -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        self.read_parsed(setting, |raw| converter(raw).map_err(Into::into))
    }

    fn get_value_using<T, C>(&self, setting: &Setting<T>, converter: &C) -> SettingsResult<T>
    where
        T: Clone,
        C: SettingConverter<T> + ?Sized,
    {
        self.read_parsed(setting, |raw| converter.parse(raw))
    }

    fn set_value<T>(&self, setting: &Setting<T>, value: T) -> SettingsResult<()>
    where
        T: SettingValue,
    {
        self.set_value_using(setting, value, &DefaultConverter)
    }

    fn set_value_with<T, F>(&self, setting: &Setting<T>, value: T, converter: F) -> SettingsResult<()>
    where
        F: Fn(&T) -> String,
    {
        validate_setting_name(setting.name())?;
        self.write_raw(setting, Some(converter(&value)))
    }

    fn set_value_using<T, C>(
        &self,
        setting: &Setting<T>,
        value: T,
        converter: &C,
    ) -> SettingsResult<()>
    where
        C: SettingConverter<T> + ?Sized,
    {
        validate_setting_name(setting.name())?;
        let raw = converter
            .stringify(&value)
            .map_err(SettingsError::Conversion)?;
        self.write_raw(setting, raw)
    }

    fn clear_value<T>(&self, setting: &Setting<T>) -> SettingsResult<bool> {
        validate_setting_name(setting.name())?;
        let store = self.store_for(setting.scope())?;
        let removed = store.remove(setting.name()).map_err(SettingsError::Store)?;
        tracing::debug!(setting = %setting, removed, "cleared setting");
        Ok(removed)
    }
}

impl fmt::Debug for SettingsRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsRepository")
            .field("max_value_len", &self.max_value_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScopeStores;
    use crate::infra::storage::InMemorySettingsStore;

    fn component_repo() -> (SettingsRepository, InMemorySettingsStore) {
        let store = InMemorySettingsStore::new();
        let repo = SettingsRepository::new(ScopeStores::new().with_component(Arc::new(store.clone())));
        (repo, store)
    }

    #[test]
    fn test_default_returned_when_unset() {
        let (repo, store) = component_repo();
        let setting = Setting::new("PageSize", SettingScope::Component, 10u32);
        assert_eq!(repo.get_value(&setting).unwrap(), 10);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let (repo, store) = component_repo();
        let setting = Setting::new("PageSize", SettingScope::Component, 10u32);
        repo.set_value(&setting, 25).unwrap();
        assert_eq!(store.read("PageSize").unwrap().as_deref(), Some("25"));
        assert_eq!(repo.get_value(&setting).unwrap(), 25);
    }

    #[test]
    fn test_unbound_scope_is_invalid_operation() {
        let (repo, _store) = component_repo();
        let setting = Setting::new("Theme", SettingScope::Site, "default".to_string());
        assert!(matches!(
            repo.get_value(&setting),
            Err(SettingsError::InvalidOperation {
                scope: SettingScope::Site
            })
        ));
    }

    #[test]
    fn test_value_length_limit() {
        let store = InMemorySettingsStore::new();
        let config = Config {
            max_value_len: 4,
            ..Config::default()
        };
        let repo = SettingsRepository::new(ScopeStores::new().with_page(Arc::new(store.clone())))
            .with_config(&config);
        let setting = Setting::new("Title", SettingScope::Page, String::new());

        repo.set_value(&setting, "four".to_string()).unwrap();
        let result = repo.set_value(&setting, "fives".to_string());
        assert!(matches!(result, Err(SettingsError::InvalidArgument { .. })));
        assert_eq!(store.read("Title").unwrap().as_deref(), Some("four"));
    }

    #[test]
    fn test_absent_value_removes_key() {
        let (repo, store) = component_repo();
        let setting = Setting::new("MaxItems", SettingScope::Component, None::<u32>);
        repo.set_value(&setting, Some(3)).unwrap();
        assert_eq!(repo.get_value(&setting).unwrap(), Some(3));

        repo.set_value(&setting, None).unwrap();
        assert!(!store.contains("MaxItems").unwrap());
        assert_eq!(repo.get_value(&setting).unwrap(), None);
    }
}
