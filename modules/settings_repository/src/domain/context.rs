//! Scope to store resolution
//!
//! The host builds a resolver from whatever it knows about the current
//! request (component placement, page, site) and hands it to the
//! repository. The repository never looks up ambient state on its own.

use std::fmt;
use std::sync::Arc;

use crate::contract::SettingScope;

use super::store::SettingsStore;

/// Picks the live store for a scope in the current context
pub trait StoreResolver: Send + Sync {
    /// Store bound to `scope`, or `None` if the context has none
    fn resolve(&self, scope: SettingScope) -> Option<Arc<dyn SettingsStore>>;
}

impl<F> StoreResolver for F
where
    F: Fn(SettingScope) -> Option<Arc<dyn SettingsStore>> + Send + Sync,
{
    fn resolve(&self, scope: SettingScope) -> Option<Arc<dyn SettingsStore>> {
        self(scope)
    }
}

/// Explicit table with one store slot per scope
///
/// Slots left empty resolve to `None`, e.g. the page scopes when settings
/// are accessed outside of any page.
#[derive(Clone, Default)]
pub struct ScopeStores {
    instance_on_page: Option<Arc<dyn SettingsStore>>,
    component: Option<Arc<dyn SettingsStore>>,
    page: Option<Arc<dyn SettingsStore>>,
    site: Option<Arc<dyn SettingsStore>>,
    installation: Option<Arc<dyn SettingsStore>>,
}

impl ScopeStores {
    /// Create a table with no store bound
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instance_on_page(self, store: Arc<dyn SettingsStore>) -> Self {
        self.with_store(SettingScope::InstanceOnPage, store)
    }

    pub fn with_component(self, store: Arc<dyn SettingsStore>) -> Self {
        self.with_store(SettingScope::Component, store)
    }

    pub fn with_page(self, store: Arc<dyn SettingsStore>) -> Self {
        self.with_store(SettingScope::Page, store)
    }

    pub fn with_site(self, store: Arc<dyn SettingsStore>) -> Self {
        self.with_store(SettingScope::Site, store)
    }

    pub fn with_installation(self, store: Arc<dyn SettingsStore>) -> Self {
        self.with_store(SettingScope::Installation, store)
    }

    /// Bind `store` to `scope`, replacing any previous binding
    pub fn with_store(mut self, scope: SettingScope, store: Arc<dyn SettingsStore>) -> Self {
        *self.slot_mut(scope) = Some(store);
        self
    }

    /// Scopes that currently have a store, narrowest first
    pub fn bound_scopes(&self) -> Vec<SettingScope> {
        SettingScope::ALL
            .into_iter()
            .filter(|scope| self.slot(*scope).is_some())
            .collect()
    }

    fn slot(&self, scope: SettingScope) -> &Option<Arc<dyn SettingsStore>> {
        match scope {
            SettingScope::InstanceOnPage => &self.instance_on_page,
            SettingScope::Component => &self.component,
            SettingScope::Page => &self.page,
            SettingScope::Site => &self.site,
            SettingScope::Installation => &self.installation,
        }
    }

    fn slot_mut(&mut self, scope: SettingScope) -> &mut Option<Arc<dyn SettingsStore>> {
        match scope {
            SettingScope::InstanceOnPage => &mut self.instance_on_page,
            SettingScope::Component => &mut self.component,
            SettingScope::Page => &mut self.page,
            SettingScope::Site => &mut self.site,
            SettingScope::Installation => &mut self.installation,
        }
    }
}

impl StoreResolver for ScopeStores {
    fn resolve(&self, scope: SettingScope) -> Option<Arc<dyn SettingsStore>> {
        self.slot(scope).clone()
    }
}

impl fmt::Debug for ScopeStores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeStores")
            .field("bound", &self.bound_scopes())
            .finish()
    }
}
