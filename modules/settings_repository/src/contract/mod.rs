//! Contract layer - public API shared by every caller
//!
//! This layer contains the setting identity, the scope enumeration, the
//! conversion strategies and the typed client trait.

pub mod client;
pub mod conversion;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use conversion::{DefaultConverter, FnConverter, JsonConverter, SettingConverter, SettingValue};
pub use error::{SettingsError, SettingsResult};
pub use model::{Setting, SettingScope};
