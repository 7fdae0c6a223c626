//! Contract error types for the settings repository
//!
//! Store and converter failures are carried transparently: their message is
//! the original one and `downcast_ref` on the payload recovers the source.

use super::model::SettingScope;

/// Settings repository errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The caller passed something unusable, such as an empty setting name
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// No store is bound for the scope in the current context.
    /// This is a wiring mistake in the host, not a runtime condition.
    #[error("Invalid operation: no settings store is bound for scope '{scope}'")]
    InvalidOperation {
        /// Scope that failed to resolve
        scope: SettingScope,
    },

    /// A converter rejected the stored string
    #[error(transparent)]
    Conversion(anyhow::Error),

    /// The backing store failed
    #[error(transparent)]
    Store(anyhow::Error),
}

impl SettingsError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether the caller can fix the call and retry
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
