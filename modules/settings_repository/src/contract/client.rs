//! Typed settings API
//!
//! This trait defines what callers use to read and write settings without
//! knowing which store holds them. Every operation rejects an empty setting
//! name before any store is touched.

use super::conversion::{SettingConverter, SettingValue};
use super::error::SettingsResult;
use super::model::Setting;

/// Get and set typed settings
pub trait SettingsApi {
    /// Whether a value is stored for the setting in its scope
    fn has_value<T>(&self, setting: &Setting<T>) -> SettingsResult<bool>;

    /// Read the setting with its built-in conversion.
    ///
    /// Returns a clone of the setting's default when nothing is stored.
    fn get_value<T>(&self, setting: &Setting<T>) -> SettingsResult<T>
    where
        T: SettingValue + Clone;

    /// Read the setting, parsing the stored string with `converter`
    fn get_value_with<T, E, F>(&self, setting: &Setting<T>, converter: F) -> SettingsResult<T>
    where
        T: Clone,
        F: Fn(&str) -> Result<T, E>,
        E: Into<anyhow::Error>;

    /// Read the setting through a full conversion strategy
    fn get_value_using<T, C>(&self, setting: &Setting<T>, converter: &C) -> SettingsResult<T>
    where
        T: Clone,
        C: SettingConverter<T> + ?Sized;

    /// Store `value` with its built-in conversion.
    ///
    /// An absent value (such as `None`) removes whatever is stored.
    fn set_value<T>(&self, setting: &Setting<T>, value: T) -> SettingsResult<()>
    where
        T: SettingValue;

    /// Store `value` as the string produced by `converter`
    fn set_value_with<T, F>(&self, setting: &Setting<T>, value: T, converter: F) -> SettingsResult<()>
    where
        F: Fn(&T) -> String;

    /// Store `value` through a full conversion strategy
    fn set_value_using<T, C>(
        &self,
        setting: &Setting<T>,
        value: T,
        converter: &C,
    ) -> SettingsResult<()>
    where
        C: SettingConverter<T> + ?Sized;

    /// Remove any stored value, returning whether one existed
    fn clear_value<T>(&self, setting: &Setting<T>) -> SettingsResult<bool>;
}
