//! Configuration for the settings repository

use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

use crate::contract::{SettingScope, SettingsError};

/// Settings repository configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Values preloaded into in-memory stores, keyed by symbolic scope name
    /// (`instance_on_page`, `component`, `page`, `site`, `installation`)
    #[serde(default)]
    pub seed: HashMap<String, HashMap<String, String>>,

    /// Maximum length in bytes of a stored value
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: HashMap::new(),
            max_value_len: default_max_value_len(),
        }
    }
}

impl Config {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid settings repository configuration")
    }

    /// Seed values grouped by scope, narrowest scope first
    pub fn seed_by_scope(&self) -> Result<Vec<(SettingScope, &HashMap<String, String>)>, SettingsError> {
        let mut seeds = self
            .seed
            .iter()
            .map(|(name, values)| Ok((name.parse::<SettingScope>()?, values)))
            .collect::<Result<Vec<_>, SettingsError>>()?;
        seeds.sort_by_key(|(scope, _)| *scope);
        Ok(seeds)
    }
}

fn default_max_value_len() -> usize {
    1024 * 1024 // 1MB
}
