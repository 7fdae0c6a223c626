//! Settings Repository
//!
//! Typed access to named settings stored in string-keyed stores, one store
//! per scope (component placement, component, page, site, installation).
//! Callers declare a [`Setting`] once and read or write it through
//! [`SettingsApi`]; the repository picks the store for the setting's scope
//! and converts between the typed value and its persisted string.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, error::SettingsResult, DefaultConverter,
    FnConverter, JsonConverter, Setting, SettingConverter, SettingScope, SettingValue,
};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{ScopeStores, SettingsRepository, SettingsStore, StoreResolver};

pub mod infra;
pub use infra::storage::{InMemoryScopeStores, InMemorySettingsStore};
