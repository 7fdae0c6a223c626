//! Domain layer - scope resolution and the settings repository

pub mod context;
pub mod service;
pub mod store;
pub mod validation;

pub use context::{ScopeStores, StoreResolver};
pub use service::SettingsRepository;
pub use store::SettingsStore;
