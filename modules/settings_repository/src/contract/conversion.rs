//! Conversion between typed setting values and their persisted strings
//!
//! Every persisted form is locale-invariant: numbers use Rust's `Display`
//! (no grouping separators, `.` as the decimal mark) and timestamps use
//! RFC 3339 in UTC.

use std::marker::PhantomData;

use anyhow::{anyhow, Context};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Built-in conversion for types the repository can handle without help
///
/// Implemented for integers, floats, `bool`, `char`, `String`,
/// `DateTime<Utc>`, `Uuid` and `Option` of any of those. Other types go
/// through an explicit [`SettingConverter`].
pub trait SettingValue: Sized {
    /// String form of the value, or `None` when the value is "absent"
    fn to_setting_string(&self) -> Option<String>;

    /// Parse a stored string
    fn from_setting_string(raw: &str) -> anyhow::Result<Self>;
}

macro_rules! impl_setting_value_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SettingValue for $ty {
                fn to_setting_string(&self) -> Option<String> {
                    Some(self.to_string())
                }

                fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
                    raw.trim().parse::<$ty>().with_context(|| {
                        format!("'{}' is not a valid {}", raw, stringify!($ty))
                    })
                }
            }
        )*
    };
}

impl_setting_value_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl SettingValue for bool {
    fn to_setting_string(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(anyhow!("'{}' is not a valid bool", raw))
        }
    }
}

impl SettingValue for char {
    fn to_setting_string(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        raw.parse::<char>()
            .with_context(|| format!("'{}' is not a single character", raw))
    }
}

impl SettingValue for String {
    fn to_setting_string(&self) -> Option<String> {
        Some(self.clone())
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        Ok(raw.to_string())
    }
}

impl SettingValue for DateTime<Utc> {
    fn to_setting_string(&self) -> Option<String> {
        Some(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("'{}' is not an RFC 3339 timestamp", raw))
    }
}

impl SettingValue for Uuid {
    fn to_setting_string(&self) -> Option<String> {
        Some(self.hyphenated().to_string())
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        Uuid::parse_str(raw.trim()).with_context(|| format!("'{}' is not a valid UUID", raw))
    }
}

/// `None` is the absent value; an empty stored string reads back as `None`
impl<T: SettingValue> SettingValue for Option<T> {
    fn to_setting_string(&self) -> Option<String> {
        self.as_ref().and_then(T::to_setting_string)
    }

    fn from_setting_string(raw: &str) -> anyhow::Result<Self> {
        if raw.is_empty() {
            return Ok(None);
        }
        T::from_setting_string(raw).map(Some)
    }
}

/// Bidirectional mapping between `T` and its persisted string
pub trait SettingConverter<T> {
    /// String form of `value`; `Ok(None)` means nothing should be stored
    fn stringify(&self, value: &T) -> anyhow::Result<Option<String>>;

    /// Inverse of [`stringify`](Self::stringify)
    fn parse(&self, raw: &str) -> anyhow::Result<T>;
}

/// Strategy used when the caller supplies no converter
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl<T: SettingValue> SettingConverter<T> for DefaultConverter {
    fn stringify(&self, value: &T) -> anyhow::Result<Option<String>> {
        Ok(value.to_setting_string())
    }

    fn parse(&self, raw: &str) -> anyhow::Result<T> {
        T::from_setting_string(raw)
    }
}

/// Converter assembled from a pair of closures
#[derive(Clone)]
pub struct FnConverter<P, S> {
    parse: P,
    stringify: S,
}

impl<P, S> FnConverter<P, S> {
    pub fn new(parse: P, stringify: S) -> Self {
        Self { parse, stringify }
    }
}

impl<T, P, S> SettingConverter<T> for FnConverter<P, S>
where
    P: Fn(&str) -> anyhow::Result<T>,
    S: Fn(&T) -> String,
{
    fn stringify(&self, value: &T) -> anyhow::Result<Option<String>> {
        Ok(Some((self.stringify)(value)))
    }

    fn parse(&self, raw: &str) -> anyhow::Result<T> {
        (self.parse)(raw)
    }
}

/// Compact JSON for structured values; a value serializing to `null` is absent
pub struct JsonConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> SettingConverter<T> for JsonConverter<T> {
    fn stringify(&self, value: &T) -> anyhow::Result<Option<String>> {
        let json = serde_json::to_value(value).context("failed to serialize setting to JSON")?;
        if json.is_null() {
            return Ok(None);
        }
        Ok(Some(json.to_string()))
    }

    fn parse(&self, raw: &str) -> anyhow::Result<T> {
        serde_json::from_str(raw).with_context(|| format!("'{}' is not valid setting JSON", raw))
    }
}
