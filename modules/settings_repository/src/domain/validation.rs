//! Argument checks run before any store access

use crate::contract::SettingsError;

/// Validate a setting name
///
/// The name is the store key, so the only hard requirement is that it is
/// not empty.
pub fn validate_setting_name(name: &str) -> Result<(), SettingsError> {
    if name.is_empty() {
        return Err(SettingsError::invalid_argument("setting name cannot be empty"));
    }
    Ok(())
}

/// Validate the length of a string about to be written
pub fn validate_value_len(name: &str, raw: &str, max_len: usize) -> Result<(), SettingsError> {
    if raw.len() > max_len {
        return Err(SettingsError::invalid_argument(format!(
            "value for setting '{}' is {} bytes, exceeding the {} byte limit",
            name,
            raw.len(),
            max_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_setting_name() {
        assert!(validate_setting_name("PageSize").is_ok());
        assert!(validate_setting_name(" ").is_ok());
        assert!(validate_setting_name("Engage.Module.Theme").is_ok());
    }

    #[test]
    fn test_validate_setting_name_empty() {
        let result = validate_setting_name("");
        if let Err(SettingsError::InvalidArgument { message }) = result {
            assert!(message.contains("empty"));
        } else {
            panic!("Expected InvalidArgument error");
        }
    }

    #[test]
    fn test_validate_value_len() {
        assert!(validate_value_len("a", "12345", 5).is_ok());
        assert!(validate_value_len("a", "", 0).is_ok());

        let result = validate_value_len("a", "123456", 5);
        assert!(matches!(result, Err(SettingsError::InvalidArgument { .. })));
    }
}
