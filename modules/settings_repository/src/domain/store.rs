//! Backing store trait
//!
//! A store is a string-keyed, string-valued map owned by the host, one per
//! scope per context (one per page, one per site, ...). Implementations for
//! tests and embedding live in infra/storage.

use anyhow::Result;

/// String-keyed settings store for one scope in one context
pub trait SettingsStore: Send + Sync {
    /// Check if a value is stored under `key`
    fn contains(&self, key: &str) -> Result<bool>;

    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: String) -> Result<()>;

    /// Remove the value under `key`, returning whether one was present
    fn remove(&self, key: &str) -> Result<bool>;
}
