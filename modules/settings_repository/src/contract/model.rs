//! Contract models for the settings repository
//!
//! These models are transport-agnostic and shared by every caller.
//! NO serde derives - scopes travel by their symbolic name only.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::error::SettingsError;

/// Context level at which a setting value is stored
///
/// Variants are declared from the narrowest context to the widest one, and
/// the derived ordering follows that declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingScope {
    /// A single placement of a component on one page
    InstanceOnPage,
    /// The component itself, shared by every placement of it
    Component,
    /// A single page
    Page,
    /// An entire site
    Site,
    /// The whole installation, across all sites
    Installation,
}

impl SettingScope {
    /// Every scope, narrowest first
    pub const ALL: [SettingScope; 5] = [
        SettingScope::InstanceOnPage,
        SettingScope::Component,
        SettingScope::Page,
        SettingScope::Site,
        SettingScope::Installation,
    ];

    /// Symbolic name used wherever a scope is written down
    pub const fn as_str(&self) -> &'static str {
        match self {
            SettingScope::InstanceOnPage => "instance_on_page",
            SettingScope::Component => "component",
            SettingScope::Page => "page",
            SettingScope::Site => "site",
            SettingScope::Installation => "installation",
        }
    }

    /// Whether the store for this scope belongs to the component.
    ///
    /// Stores of other scopes are shared with unrelated components, so names
    /// used there need to be unique beyond the component's own namespace.
    pub const fn is_component_owned(&self) -> bool {
        matches!(self, SettingScope::InstanceOnPage | SettingScope::Component)
    }
}

impl fmt::Display for SettingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingScope {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SettingScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == normalized)
            .ok_or_else(|| SettingsError::InvalidArgument {
                message: format!("unknown setting scope '{}'", s),
            })
    }
}

/// Definition of one configurable value
///
/// Identity is `(name, scope)`: two settings that differ only in their
/// default value compare and hash as equal.
#[derive(Debug, Clone)]
pub struct Setting<T> {
    name: Cow<'static, str>,
    scope: SettingScope,
    default_value: T,
}

impl<T> Setting<T> {
    /// Create a setting with a static name, usable in `const` and `static` items
    pub const fn new(name: &'static str, scope: SettingScope, default_value: T) -> Self {
        Self {
            name: Cow::Borrowed(name),
            scope,
            default_value,
        }
    }

    /// Create a setting whose name is only known at runtime
    pub fn with_name(name: impl Into<String>, scope: SettingScope, default_value: T) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            scope,
            default_value,
        }
    }

    /// Key of the setting inside its scope's store
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> SettingScope {
        self.scope
    }

    /// Value reported while nothing is stored for the setting
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Whether the setting lives in a store shared beyond the component
    pub fn is_shared(&self) -> bool {
        !self.scope.is_component_owned()
    }
}

impl<T> PartialEq for Setting<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.scope == other.scope
    }
}

impl<T> Eq for Setting<T> {}

impl<T> Hash for Setting<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.scope.hash(state);
    }
}

impl<T> fmt::Display for Setting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.name)
    }
}
